//! Deterministic THC range derivation for strain catalogs.
//!
//! `strain-thc-core` maps a strain's display name to a stable THC percentage
//! range, exposes a memoized view (range, average, display string) for
//! rendering, ranks catalogs by the derived average, and pins derived values
//! as content-versioned JSON snapshots. Derivation is pure: identical names
//! always produce identical ranges, across calls, processes and platforms.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod derivation;
pub mod snapshot;
pub mod types;

pub use cache::ViewCache;
pub use config::GeneratorConfig;
pub use derivation::{derive_range, get_view, RangeGenerator};
pub use types::{DerivedView, StrainKey, ThcPercent, ThcRange};
