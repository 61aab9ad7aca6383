//! Cart store: the single owner of cart state.
//!
//! Consumers hold an `Arc<dyn CartHandle>` and never touch the `Cart`
//! aggregate directly.

pub mod handle;
pub mod store;

pub use handle::CartHandle;
pub use store::{AGGREGATE_TYPE, CartEnvelope, CartStore, DispatchError, InMemoryCartBus};
