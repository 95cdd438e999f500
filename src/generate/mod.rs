//! Generation pipeline orchestration.
//!
//! Lifecycle: truncate the output and write the column header once, start
//! the serial writer, start one producer per session, wait for every
//! producer to finish, close the channel, then wait for the writer to
//! drain. Returning before the drain completes would lose buffered rows.

mod producer;
mod writer;

pub use writer::WriteMetrics;

use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;

use catalog_source::Product;
use event_generator::{Event, Session};
use rand::Rng;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::config::GenerateConfig;

/// Buffer size for the output CSV writer.
const OUTPUT_BUFFER_SIZE: usize = 8192;

/// Errors that can end a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The catalog has no products to sample from.
    #[error("Catalog is empty; cannot choose products for events")]
    EmptyCatalog,

    /// The per-session event-count bounds are inverted.
    #[error("min_events ({min}) must not exceed max_events ({max})")]
    InvalidEventRange { min: u64, max: u64 },

    /// The per-producer rate is not a positive number.
    #[error("Rate must be a positive number of events per second, got {0}")]
    InvalidRate(f64),

    /// Output file creation or write failure. Rows flushed before the
    /// failure remain valid on disk.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The CSV layer failed to append a row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The aggregation channel closed while a session was still emitting.
    #[error("Aggregation channel closed before the session finished")]
    ChannelClosed,

    /// One or more producers failed; the remaining sessions ran to
    /// completion before the run was failed.
    #[error("{failed} of {total} producers failed: {details}")]
    ProducerFailures {
        failed: usize,
        total: usize,
        details: String,
    },

    /// The writer task panicked or was cancelled.
    #[error("Writer task failed: {0}")]
    WriterJoin(#[from] tokio::task::JoinError),
}

/// Run the full generation pipeline to completion.
///
/// The catalog is shared read-only across all producers; the writer owns
/// exclusive write access to the output for the run's whole duration.
pub async fn run(
    config: &GenerateConfig,
    catalog: Vec<Product>,
) -> Result<WriteMetrics, GenerateError> {
    config.validate(catalog.len())?;
    let catalog: Arc<[Product]> = catalog.into();

    // Truncate/create the output and write the header exactly once.
    let file = File::create(&config.output)?;
    let mut csv_writer =
        csv::Writer::from_writer(BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, file));
    csv_writer.write_record(Event::HEADERS)?;
    csv_writer.flush()?;

    // Writer first, then the producers that feed it.
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let writer_handle = tokio::spawn(writer::run_writer(csv_writer, rx));

    let mut producers = Vec::with_capacity(config.num_generators);
    {
        let mut rng = rand::thread_rng();
        for i in 0..config.num_generators {
            let session = Session::generate();
            let total_events = rng.gen_range(config.min_events..=config.max_events);
            info!(
                generator = i + 1,
                user_id = session.user_id,
                user_session = %session.user_session,
                total_events,
                "starting session producer"
            );
            producers.push(tokio::spawn(producer::run_producer(
                session,
                config.rate,
                Arc::clone(&catalog),
                total_events,
                tx.clone(),
            )));
        }
    }

    // Every producer must terminate before the channel may close. Failed
    // producers are collected rather than aborting the others mid-run.
    let mut errors = Vec::new();
    for (i, handle) in producers.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!("Producer {} failed: {}", i + 1, e);
                errors.push(format!("producer {}: {e}", i + 1));
            }
            Err(e) => {
                error!("Producer {} panicked: {}", i + 1, e);
                errors.push(format!("producer {}: {e}", i + 1));
            }
        }
    }

    // Close signal: dropping the last sender makes the writer's recv()
    // return None once the queue is drained.
    drop(tx);

    let metrics = writer_handle.await??;
    info!(
        rows = metrics.rows_written,
        elapsed = ?metrics.total_duration,
        rows_per_sec = format_args!("{:.2}", metrics.rows_per_second()),
        "generation complete"
    );

    if !errors.is_empty() {
        return Err(GenerateError::ProducerFailures {
            failed: errors.len(),
            total: config.num_generators,
            details: errors.join("; "),
        });
    }

    Ok(metrics)
}
