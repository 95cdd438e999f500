//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("Failed to open catalog {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
