pub mod memo;

pub use memo::ViewCache;
