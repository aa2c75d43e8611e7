use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A strain's display name, used verbatim as the derivation input.
///
/// No normalization is applied: `"OG Kush"` and `"og kush"` are different
/// keys and derive different ranges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrainKey(String);

impl StrainKey {
    pub fn new(name: impl Into<String>) -> Self {
        StrainKey(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-16 code units, the unit the rolling hash consumes.
    pub fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.encode_utf16()
    }
}

impl From<&str> for StrainKey {
    fn from(name: &str) -> Self {
        StrainKey::new(name)
    }
}

impl From<String> for StrainKey {
    fn from(name: String) -> Self {
        StrainKey(name)
    }
}

impl fmt::Display for StrainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a snapshot, `sha256:<hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotVersion(String);

impl SnapshotVersion {
    pub fn from_hasher(hasher: Sha256) -> Self {
        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SnapshotVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapshotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
