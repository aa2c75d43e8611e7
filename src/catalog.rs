use std::cmp::Ordering;

use serde::Serialize;

use crate::derivation::RangeGenerator;
use crate::types::{DerivedView, StrainKey};

/// A strain paired with its derived view, as listed in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    pub key: StrainKey,
    pub view: DerivedView,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid average bounds: min {min} > max {max}")]
    InvalidBounds { min: f64, max: f64 },
}

/// Lists `keys` by derived average, highest first, ties broken by key.
pub fn rank_by_average<I, K>(generator: &RangeGenerator, keys: I) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = K>,
    K: Into<StrainKey>,
{
    let mut entries: Vec<CatalogEntry> = keys
        .into_iter()
        .map(|k| {
            let key = k.into();
            let view = generator.view(&key);
            CatalogEntry { key, view }
        })
        .collect();

    // Sort globally by (average desc, key asc)
    entries.sort_by(|a, b| {
        let avg_cmp = b
            .view
            .average
            .partial_cmp(&a.view.average)
            .unwrap_or(Ordering::Equal);
        if avg_cmp != Ordering::Equal {
            avg_cmp
        } else {
            a.key.cmp(&b.key)
        }
    });

    debug_assert!(entries.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.view.average > b.view.average || (a.view.average == b.view.average && a.key <= b.key)
    }));

    entries
}

/// Ranked entries whose average lies within `[min, max]`.
pub fn filter_by_average<I, K>(
    generator: &RangeGenerator,
    keys: I,
    min: f64,
    max: f64,
) -> Result<Vec<CatalogEntry>, CatalogError>
where
    I: IntoIterator<Item = K>,
    K: Into<StrainKey>,
{
    if min.is_nan() || max.is_nan() || min > max {
        return Err(CatalogError::InvalidBounds { min, max });
    }

    let ranked = rank_by_average(generator, keys);
    let total = ranked.len();
    let kept: Vec<CatalogEntry> = ranked
        .into_iter()
        .filter(|entry| (min..=max).contains(&entry.view.average))
        .collect();

    tracing::debug!(min, max, total, kept = kept.len(), "filtered catalog by average");
    Ok(kept)
}
