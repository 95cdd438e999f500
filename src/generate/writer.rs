//! Serial writer task: the sole consumer of the aggregation channel.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use event_generator::Event;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use super::GenerateError;

/// Metrics from one completed run.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Data rows appended; the header is not counted.
    pub rows_written: u64,
    /// Wall time from writer start to drain.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Receive events until the channel closes, appending each as one row
/// before taking the next.
///
/// Rows are never interleaved or partially written because this task is
/// the only writer for the run's duration. On close it flushes anything
/// still buffered before returning.
pub async fn run_writer(
    mut writer: csv::Writer<BufWriter<File>>,
    mut rx: UnboundedReceiver<Event>,
) -> Result<WriteMetrics, GenerateError> {
    let start = Instant::now();
    let mut metrics = WriteMetrics::default();

    while let Some(event) = rx.recv().await {
        writer.write_record(event.csv_record())?;
        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    writer.flush()?;
    metrics.total_duration = start.elapsed();
    Ok(metrics)
}
