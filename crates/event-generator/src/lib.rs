//! Event model for clickstream-gen.
//!
//! Defines the shape of one generated user-behavior record, the weighted
//! categorical distribution its type is drawn from, and the simulated
//! session identity that stays stable across a producer's lifetime.

mod event;
mod session;

pub use event::{Event, EventType};
pub use session::Session;
