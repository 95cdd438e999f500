//! Run configuration and fail-fast validation.

use std::path::PathBuf;

use crate::generate::GenerateError;

/// Configuration surface of one generation run. Every field is
/// effect-bearing; there are no hidden defaults.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Output CSV path; truncated and rewritten on every run.
    pub output: PathBuf,
    /// Events per second for each individual producer, not divided among
    /// them; aggregate throughput is roughly `num_generators * rate`.
    pub rate: f64,
    /// Number of concurrent simulated sessions.
    pub num_generators: usize,
    /// Inclusive lower bound on events per session.
    pub min_events: u64,
    /// Inclusive upper bound on events per session.
    pub max_events: u64,
}

impl GenerateConfig {
    /// Validate the configuration against the loaded catalog.
    ///
    /// Runs before any task is spawned so configuration errors are never
    /// discovered mid-run.
    pub fn validate(&self, catalog_len: usize) -> Result<(), GenerateError> {
        if catalog_len == 0 {
            return Err(GenerateError::EmptyCatalog);
        }
        if self.min_events > self.max_events {
            return Err(GenerateError::InvalidEventRange {
                min: self.min_events,
                max: self.max_events,
            });
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(GenerateError::InvalidRate(self.rate));
        }
        Ok(())
    }
}
