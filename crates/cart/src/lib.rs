//! Shopping cart domain module.
//!
//! This crate contains the cart's business rules, implemented purely as
//! deterministic domain logic (no IO, no UI, no storage).

pub mod action;
pub mod cart;
pub mod policy;
pub mod summary;

pub use action::{ActionPayload, CartAction};
pub use cart::{
    AddItem, Cart, CartCommand, CartEvent, CartLineItem, CartSubmitted, ItemAdded, ItemRemoved,
    QuantityChanged, RemoveItem, SetQuantity,
};
pub use policy::{QuantityChange, QuantityPolicy};
pub use summary::CartSummary;
