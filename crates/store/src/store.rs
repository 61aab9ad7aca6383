//! Command execution for the cart.
//!
//! ```text
//! CartCommand
//!   ↓
//! 1. Decide (Cart::handle, pure; a rejection stops here, state untouched)
//!   ↓
//! 2. Evolve (Cart::apply for each decided event, version += 1 each)
//!   ↓
//! 3. Publish one EventEnvelope per event on the bus
//! ```
//!
//! Reads go through a summary memo keyed on the cart version, so repeated
//! reads between commands do not re-sort the cart.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use storefront_cart::{Cart, CartCommand, CartEvent, CartSummary};
use storefront_core::{Aggregate, DomainError};
use storefront_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription, execute};

/// Aggregate type recorded on every published envelope.
pub const AGGREGATE_TYPE: &str = "cart";

pub type CartEnvelope = EventEnvelope<CartEvent>;

pub type InMemoryCartBus = InMemoryEventBus<CartEnvelope>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The command was rejected by the cart (or could not be built).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Publication failed after the events were applied.
    #[error("failed to publish cart event: {0}")]
    Publish(String),

    /// A previous panic poisoned the store's state lock.
    #[error("cart store lock poisoned")]
    Poisoned,
}

/// Owns the cart, applies commands to it, and publishes what happened.
#[derive(Debug)]
pub struct CartStore<B> {
    cart: RwLock<Cart>,
    summary: RwLock<Option<Arc<CartSummary>>>,
    bus: B,
}

impl<B> CartStore<B> {
    pub fn new(cart: Cart, bus: B) -> Self {
        Self {
            cart: RwLock::new(cart),
            summary: RwLock::new(None),
            bus,
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn version(&self) -> Result<u64, DispatchError> {
        let cart = self.cart.read().map_err(|_| DispatchError::Poisoned)?;
        Ok(cart.version())
    }

    /// Derived cart view, recomputed only when the cart version has moved.
    pub fn summary(&self) -> Result<Arc<CartSummary>, DispatchError> {
        let cart = self.cart.read().map_err(|_| DispatchError::Poisoned)?;

        {
            let cached = self.summary.read().map_err(|_| DispatchError::Poisoned)?;
            if let Some(summary) = cached.as_ref().filter(|s| s.version == cart.version()) {
                return Ok(Arc::clone(summary));
            }
        }

        let fresh = Arc::new(cart.summary());
        let mut cached = self.summary.write().map_err(|_| DispatchError::Poisoned)?;
        *cached = Some(Arc::clone(&fresh));
        tracing::trace!(version = fresh.version, "cart summary recomputed");
        Ok(fresh)
    }
}

impl<B> CartStore<B>
where
    B: EventBus<CartEnvelope>,
{
    pub fn subscribe(&self) -> Subscription<CartEnvelope> {
        self.bus.subscribe()
    }

    /// Apply one command and publish its events.
    ///
    /// Returns the applied events; an empty list means the command was a
    /// no-op (e.g. removing a sku that is not in the cart).
    pub fn dispatch(&self, command: CartCommand) -> Result<Vec<CartEvent>, DispatchError> {
        let kind = command.kind();

        let (events, cart_id, version) = {
            let mut cart = self.cart.write().map_err(|_| DispatchError::Poisoned)?;
            match execute(&mut *cart, &command) {
                Ok(events) => (events, cart.id(), cart.version()),
                Err(err) => {
                    tracing::warn!(kind, error = %err, "cart command rejected");
                    return Err(err.into());
                }
            }
        };

        if events.is_empty() {
            tracing::debug!(kind, version, "cart command changed nothing");
            return Ok(events);
        }

        let first_sequence = version + 1 - events.len() as u64;
        for (offset, event) in events.iter().enumerate() {
            let sequence = first_sequence + offset as u64;
            let envelope = EventEnvelope::record(cart_id, AGGREGATE_TYPE, sequence, event.clone());
            self.bus
                .publish(envelope)
                .map_err(|e| DispatchError::Publish(format!("{e:?}")))?;
        }

        tracing::debug!(kind, version, events = events.len(), "cart command applied");
        Ok(events)
    }
}

impl CartStore<Arc<InMemoryCartBus>> {
    /// Store backed by a fresh in-memory bus.
    pub fn in_memory(cart: Cart) -> Self {
        Self::new(cart, Arc::new(InMemoryEventBus::new()))
    }
}
