//! Content-keyed forecast memoization
//!
//! The key is the full serialized content of the model, the delta set and the
//! config, so changing any field is a different key and stale entries are
//! simply never hit again. Entries are never invalidated per field. When the
//! cache reaches capacity it is cleared wholesale.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::forecast::generate_with_config;
use crate::model::{FinancialModel, ForecastPeriodData, ScenarioParameterDeltas};
use crate::scenario::apply_deltas;

const DEFAULT_CAPACITY: usize = 64;

/// Shared, immutable forecast series
pub type SharedSeries = Arc<Vec<ForecastPeriodData>>;

#[derive(Debug)]
pub struct ForecastCache {
    entries: FxHashMap<String, SharedSeries>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ForecastCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached series for `(model, deltas, config)`, generating it on a miss.
    ///
    /// `None` deltas means the baseline. Errors are returned and not cached.
    pub fn get_or_generate(
        &mut self,
        model: &FinancialModel,
        deltas: Option<&ScenarioParameterDeltas>,
        config: &ForecastConfig,
    ) -> Result<SharedSeries> {
        let key = cache_key(model, deltas, config)?;
        if let Some(series) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(model = %model.id, "forecast cache hit");
            return Ok(Arc::clone(series));
        }

        self.misses += 1;
        tracing::debug!(model = %model.id, "forecast cache miss");

        let series = match deltas {
            Some(deltas) => generate_with_config(&apply_deltas(model, deltas), config)?,
            None => generate_with_config(model, config)?,
        };
        let series = Arc::new(series);

        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&series));
        Ok(series)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

fn cache_key(
    model: &FinancialModel,
    deltas: Option<&ScenarioParameterDeltas>,
    config: &ForecastConfig,
) -> Result<String> {
    serde_json::to_string(&(model, deltas, config))
        .map_err(|e| ForecastError::InvalidModel(format!("cannot build cache key: {e}")))
}
