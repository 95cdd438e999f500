//! Session producer task.

use std::sync::Arc;
use std::time::Duration;

use catalog_source::Product;
use chrono::Utc;
use event_generator::{Event, EventType, Session};
use rand::Rng;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::GenerateError;

/// Emit exactly `total_events` events for one session, pausing `1/rate`
/// seconds between emissions, then terminate.
///
/// The catalog is shared read-only; the channel is the only thing a
/// producer writes to. Producers never share mutable state with each
/// other and never retry.
pub async fn run_producer(
    session: Session,
    rate: f64,
    catalog: Arc<[Product]>,
    total_events: u64,
    tx: UnboundedSender<Event>,
) -> Result<(), GenerateError> {
    let pause = Duration::from_secs_f64(1.0 / rate);

    for _ in 0..total_events {
        // The RNG is scoped so it is not held across the sleep below.
        let event = {
            let mut rng = rand::thread_rng();
            let event_type = EventType::sample(&mut rng);
            let product = &catalog[rng.gen_range(0..catalog.len())];
            Event::build(&session, product, event_type, Utc::now())
        };

        // A closed channel means the writer is gone; nothing sent past
        // this point would be persisted.
        tx.send(event).map_err(|_| GenerateError::ChannelClosed)?;

        tokio::time::sleep(pause).await;
    }

    debug!(
        user_session = %session.user_session,
        total_events,
        "session complete"
    );
    Ok(())
}
