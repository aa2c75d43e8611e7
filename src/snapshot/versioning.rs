use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::config::GeneratorConfig;
use crate::types::{DerivedView, SnapshotVersion, StrainKey, ThcRange};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotEntry {
    pub key: StrainKey,
    pub range: ThcRange,
    pub average: f64,
    pub display: String,
}

impl SnapshotEntry {
    pub fn new(key: StrainKey, view: DerivedView) -> Self {
        Self {
            key,
            range: view.range,
            average: view.average,
            display: view.display,
        }
    }

    pub fn view(&self) -> DerivedView {
        DerivedView {
            range: self.range,
            average: self.average,
            display: self.display.clone(),
        }
    }
}

/// A pinned set of derived views.
///
/// `snapshot_version` covers the config and every entry; `created_at` is
/// informational and excluded from it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RangeSnapshot {
    pub snapshot_version: SnapshotVersion,
    pub config: GeneratorConfig,
    pub created_at: DateTime<Utc>,
    pub entry_count: usize,
    pub entries: Vec<SnapshotEntry>,
}

/// `sha256(config_json || "key\tlow\thigh\n"...)` over entries in the given order.
pub fn compute_version(
    config: &GeneratorConfig,
    entries: &[SnapshotEntry],
) -> Result<SnapshotVersion, serde_json::Error> {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_vec(config)?;
    hasher.update(&config_json);

    for entry in entries {
        let line = format!(
            "{}\t{}\t{}\n",
            entry.key.as_str(),
            entry.range.low(),
            entry.range.high()
        );
        hasher.update(line.as_bytes());
    }

    Ok(SnapshotVersion::from_hasher(hasher))
}
