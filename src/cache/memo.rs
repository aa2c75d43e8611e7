use std::collections::HashMap;

use crate::config::GeneratorConfig;
use crate::derivation::RangeGenerator;
use crate::types::{DerivedView, StrainKey};

/// Per-key memoization of derived views.
///
/// Owned by whoever renders; there is no process-wide instance. Dropping or
/// clearing the cache never changes what `get` returns, only how often the
/// hash runs.
#[derive(Debug, Default)]
pub struct ViewCache {
    generator: RangeGenerator,
    views: HashMap<StrainKey, DerivedView>,
}

impl ViewCache {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_generator(RangeGenerator::new(config))
    }

    pub fn with_generator(generator: RangeGenerator) -> Self {
        Self {
            generator,
            views: HashMap::new(),
        }
    }

    pub fn generator(&self) -> &RangeGenerator {
        &self.generator
    }

    pub fn get(&mut self, key: &StrainKey) -> &DerivedView {
        // contains_key first so hits don't clone the key
        if self.views.contains_key(key) {
            tracing::trace!(key = %key, "view cache hit");
        } else {
            let view = self.generator.view(key);
            tracing::debug!(key = %key, display = %view.display, "view cache miss");
            self.views.insert(key.clone(), view);
        }
        &self.views[key]
    }

    pub fn contains(&self, key: &StrainKey) -> bool {
        self.views.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn clear(&mut self) {
        tracing::debug!(entries = self.views.len(), "clearing view cache");
        self.views.clear();
    }
}
