pub mod identifiers;
pub mod thc_range;

pub use identifiers::{SnapshotVersion, StrainKey};
pub use thc_range::{DerivedView, RangeError, ThcPercent, ThcRange};
