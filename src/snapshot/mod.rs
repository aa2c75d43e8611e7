pub mod builder;
pub mod store;
pub mod versioning;

pub use builder::{SnapshotBuilder, SnapshotError};
pub use versioning::{compute_version, RangeSnapshot, SnapshotEntry};
