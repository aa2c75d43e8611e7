// Snapshots on disk are read-only fixtures:
// written once, atomically
// verified on every load

use std::fs;
use std::path::Path;

use crate::derivation::RangeGenerator;
use crate::snapshot::builder::SnapshotError;
use crate::snapshot::versioning::{compute_version, RangeSnapshot};
use crate::types::DerivedView;

impl RangeSnapshot {
    /// Writes pretty JSON to `path` via a sibling temp file and a rename.
    pub fn write(&self, path: &Path) -> Result<(), SnapshotError> {
        if path.exists() {
            return Err(SnapshotError::OutputExists(path.to_path_buf()));
        }

        // Deterministic-but-unique temp name from the version digest
        let fragment = self
            .snapshot_version
            .as_str()
            .strip_prefix("sha256:")
            .and_then(|hex| hex.get(..12))
            .unwrap_or("partial");
        let temp_path = path.with_extension(format!("tmp.{fragment}"));

        // Stale temp file from a crashed write of this same version
        if temp_path.exists() {
            fs::remove_file(&temp_path)?;
        }

        if let Err(e) = self.write_temp(&temp_path) {
            // best effort; the write error is the one worth reporting
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, path)?;

        tracing::debug!(path = %path.display(), version = %self.snapshot_version, "wrote range snapshot");
        Ok(())
    }

    fn write_temp(&self, temp_path: &Path) -> Result<(), SnapshotError> {
        let f = fs::File::create(temp_path)?;
        serde_json::to_writer_pretty(&f, self)?;
        f.sync_all()?;
        Ok(())
    }

    /// Reads a snapshot and verifies it against a fresh derivation.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let f = fs::File::open(path)?;
        let snapshot: RangeSnapshot = serde_json::from_reader(f)?;
        snapshot.verify()?;
        Ok(snapshot)
    }

    /// Checks key order, then recomputes every entry and the version with the
    /// embedded config.
    pub fn verify(&self) -> Result<(), SnapshotError> {
        if self.entry_count != self.entries.len() {
            return Err(SnapshotError::CountMismatch {
                recorded: self.entry_count,
                found: self.entries.len(),
            });
        }

        // `get` binary-searches, so keys must be strictly ascending
        for pair in self.entries.windows(2) {
            if pair[0].key == pair[1].key {
                return Err(SnapshotError::DuplicateKey(pair[0].key.as_str().to_string()));
            }
            if pair[0].key > pair[1].key {
                return Err(SnapshotError::UnsortedEntries {
                    previous: pair[0].key.as_str().to_string(),
                    next: pair[1].key.as_str().to_string(),
                });
            }
        }

        let generator = RangeGenerator::new(self.config.clone());
        for entry in &self.entries {
            let derived = generator.view(&entry.key);
            let recorded = entry.view();
            if derived != recorded {
                return Err(SnapshotError::EntryMismatch {
                    key: entry.key.as_str().to_string(),
                    recorded: describe(&recorded),
                    derived: describe(&derived),
                });
            }
        }

        let computed = compute_version(&self.config, &self.entries)?;
        if computed != self.snapshot_version {
            return Err(SnapshotError::VersionMismatch {
                recorded: self.snapshot_version.as_str().to_string(),
                computed: computed.as_str().to_string(),
            });
        }

        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<DerivedView> {
        self.entries
            .binary_search_by(|entry| entry.key.as_str().cmp(key))
            .ok()
            .map(|idx| self.entries[idx].view())
    }
}

fn describe(view: &DerivedView) -> String {
    format!("{} (avg {})", view.display, view.average)
}
