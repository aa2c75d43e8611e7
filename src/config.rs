// Key point:
// Serializable
// Comparable
// Only the seeds vary; hash shape and target interval are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    pub version: String,
    pub seed_low: u32,
    pub seed_high: u32,
}

impl GeneratorConfig {
    /// Seed for the first hash pass.
    pub const SEED_LOW: u32 = 2_166_136_261;
    /// Seed for the second hash pass.
    pub const SEED_HIGH: u32 = 424_242_424;

    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            seed_low: Self::SEED_LOW,
            seed_high: Self::SEED_HIGH,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::v0()
    }
}
