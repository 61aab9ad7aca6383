//! Event plumbing for the cart store: the [`Event`] trait, envelopes with
//! sequence numbers, an in-memory broadcast bus and the decide/apply helper.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
