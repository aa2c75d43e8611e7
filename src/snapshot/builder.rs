use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::derivation::RangeGenerator;
use crate::snapshot::versioning::{compute_version, RangeSnapshot, SnapshotEntry};
use crate::types::StrainKey;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output file already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Duplicate strain key: {0}")]
    DuplicateKey(String),
    #[error("Entry for {key} does not match derivation: snapshot says {recorded}, derived {derived}")]
    EntryMismatch {
        key: String,
        recorded: String,
        derived: String,
    },
    #[error("Snapshot version mismatch: recorded {recorded}, computed {computed}")]
    VersionMismatch { recorded: String, computed: String },
    #[error("Entries out of order: {previous} precedes {next}")]
    UnsortedEntries { previous: String, next: String },
    #[error("Entry count mismatch: recorded {recorded}, found {found}")]
    CountMismatch { recorded: usize, found: usize },
}

/// Builds snapshots; holds only the config.
pub struct SnapshotBuilder {
    config: GeneratorConfig,
}

impl SnapshotBuilder {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn build<I, K>(&self, keys: I) -> Result<RangeSnapshot, SnapshotError>
    where
        I: IntoIterator<Item = K>,
        K: Into<StrainKey>,
    {
        // 1. Sort keys so input order never affects the version
        let mut sorted_keys: Vec<StrainKey> = keys.into_iter().map(Into::into).collect();
        sorted_keys.sort();

        // 1b. Duplicates are adjacent after sort
        for pair in sorted_keys.windows(2) {
            if pair[0] == pair[1] {
                return Err(SnapshotError::DuplicateKey(pair[0].as_str().to_string()));
            }
        }

        // 2. Derive every entry
        let generator = RangeGenerator::new(self.config.clone());
        let entries: Vec<SnapshotEntry> = sorted_keys
            .into_iter()
            .map(|key| {
                let view = generator.view(&key);
                SnapshotEntry::new(key, view)
            })
            .collect();

        // 3. Version over config + entries
        let snapshot_version = compute_version(&self.config, &entries)?;

        tracing::info!(
            entries = entries.len(),
            version = %snapshot_version,
            "built range snapshot"
        );

        // Note: created_at is strictly informational
        Ok(RangeSnapshot {
            snapshot_version,
            config: self.config.clone(),
            created_at: Utc::now(),
            entry_count: entries.len(),
            entries,
        })
    }
}
