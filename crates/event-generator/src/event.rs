//! Event shape and the categorical distribution over event types.

use catalog_source::Product;
use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::Session;

/// Relative weights of the view/cart/purchase distribution, in the same
/// proportions observed in real clickstream exports. They need not sum to
/// anything in particular; sampling normalizes over the total.
const EVENT_TYPE_WEIGHTS: [(EventType, u32); 3] = [
    (EventType::View, 385),
    (EventType::Cart, 6),
    (EventType::Purchase, 19),
];

/// The kind of user interaction an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    View,
    Cart,
    Purchase,
}

impl EventType {
    /// Draw an event type from the weighted categorical distribution.
    pub fn sample<R: Rng>(rng: &mut R) -> EventType {
        let total: u32 = EVENT_TYPE_WEIGHTS.iter().map(|(_, w)| w).sum();
        let mut roll = rng.gen_range(0..total);
        for (event_type, weight) in EVENT_TYPE_WEIGHTS {
            if roll < weight {
                return event_type;
            }
            roll -= weight;
        }
        unreachable!("roll exceeds total weight")
    }

    /// The spelling persisted in the output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::View => "view",
            EventType::Cart => "cart",
            EventType::Purchase => "purchase",
        }
    }
}

/// One generated user-behavior record, tied to one product and one session.
///
/// Product fields are copied verbatim from exactly one catalog record and
/// are never merged across products.
#[derive(Debug, Clone)]
pub struct Event {
    pub event_time: DateTime<Utc>,
    pub event_type: EventType,
    pub product_id: i64,
    pub category_id: i64,
    pub category_code: Option<String>,
    pub brand: Option<String>,
    pub price: Decimal,
    pub user_id: u64,
    pub user_session: String,
}

impl Event {
    /// Column order of the persisted rows.
    pub const HEADERS: [&'static str; 9] = [
        "event_time",
        "event_type",
        "product_id",
        "category_id",
        "category_code",
        "brand",
        "price",
        "user_id",
        "user_session",
    ];

    /// Output timestamp format: microsecond precision with a literal
    /// "UTC" suffix, not a numeric offset.
    pub const EVENT_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.6f UTC";

    /// Merge session identifiers, a timestamp, a sampled event type and one
    /// product's fields into a single record. Pure function of its inputs.
    pub fn build(
        session: &Session,
        product: &Product,
        event_type: EventType,
        event_time: DateTime<Utc>,
    ) -> Event {
        Event {
            event_time,
            event_type,
            product_id: product.product_id,
            category_id: product.category_id,
            category_code: product.category_code.clone(),
            brand: product.brand.clone(),
            price: product.price,
            user_id: session.user_id,
            user_session: session.user_session.clone(),
        }
    }

    /// Render the event as one CSV record in `HEADERS` order. Nullable
    /// product fields become empty cells.
    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.event_time.format(Self::EVENT_TIME_FORMAT).to_string(),
            self.event_type.as_str().to_string(),
            self.product_id.to_string(),
            self.category_id.to_string(),
            self.category_code.clone().unwrap_or_default(),
            self.brand.clone().unwrap_or_default(),
            self.price.to_string(),
            self.user_id.to_string(),
            self.user_session.clone(),
        ]
    }
}
