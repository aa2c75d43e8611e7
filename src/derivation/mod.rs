pub mod hash;
pub mod interpolate;

use crate::config::GeneratorConfig;
use crate::types::{DerivedView, StrainKey, ThcRange};
pub use hash::{rolling_hash, HASH_MODULUS};
pub use interpolate::{average_tenths, interpolate};

/// Stateless name -> range derivation.
///
/// Holds only its configuration; every call reads nothing but its argument,
/// so a generator can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeGenerator {
    config: GeneratorConfig,
}

impl RangeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn derive_range(&self, key: &StrainKey) -> ThcRange {
        // 1. Two independent passes over the same key
        let raw_low = rolling_hash(key, self.config.seed_low);
        let raw_high = rolling_hash(key, self.config.seed_high);

        // 2. Map both into [20.50, 26.50]
        let a = interpolate(raw_low);
        let b = interpolate(raw_high);

        // 3. Order by value, not by seed
        let range = ThcRange::from_unordered(a, b);

        debug_assert!(range.low() >= ThcRange::FLOOR && range.high() <= ThcRange::CEILING);
        range
    }

    pub fn view(&self, key: &StrainKey) -> DerivedView {
        let range = self.derive_range(key);
        let average = f64::from(average_tenths(&range)) / 10.0;

        DerivedView {
            range,
            average,
            display: range.to_string(),
        }
    }
}

/// Derives the range for `key` with the v0 seeds.
pub fn derive_range(key: &str) -> ThcRange {
    RangeGenerator::default().derive_range(&StrainKey::from(key))
}

/// Derives the full view for `key` with the v0 seeds.
pub fn get_view(key: &str) -> DerivedView {
    RangeGenerator::default().view(&StrainKey::from(key))
}
