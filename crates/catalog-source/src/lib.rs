//! Product catalog loading for clickstream-gen.
//!
//! Reads an immutable list of product records from a headered CSV export
//! and hands it to the generation pipeline as shared, read-only data.

mod error;
mod store;

pub use error::CatalogError;
pub use store::{catalog_path, load_catalog, Product};
