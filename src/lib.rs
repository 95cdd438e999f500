//! clickstream-gen library
//!
//! Synthesizes e-commerce clickstream datasets: many concurrent,
//! rate-limited session producers generate view/cart/purchase events
//! against a fixed product catalog and funnel them through an MPSC channel
//! into a single serial CSV writer.

pub mod config;
pub mod generate;

pub use config::GenerateConfig;
pub use generate::{run, GenerateError, WriteMetrics};
