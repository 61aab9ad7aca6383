use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::CartId;

use crate::event::Event;

/// A published event plus where it came from.
///
/// `sequence` is the cart version right after the event was applied, so
/// consecutive events from one cart carry consecutive numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    id: Uuid,
    cart_id: CartId,
    source: String,
    sequence: u64,
    recorded_at: DateTime<Utc>,
    payload: E,
}

impl<E> EventEnvelope<E> {
    /// Wrap `payload` with a fresh v7 id and the current time.
    pub fn record(cart_id: CartId, source: impl Into<String>, sequence: u64, payload: E) -> Self {
        Self {
            id: Uuid::now_v7(),
            cart_id,
            source: source.into(),
            sequence,
            recorded_at: Utc::now(),
            payload,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Kind of aggregate that emitted the event (`"cart"`).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E: Event> EventEnvelope<E> {
    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}
