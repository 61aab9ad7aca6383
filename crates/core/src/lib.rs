//! Storefront primitives shared by every other crate: money, skus, cart ids,
//! the aggregate contract and the domain error type. No IO lives here.

pub mod aggregate;
pub mod error;
pub mod id;
pub mod money;
pub mod sku;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use id::CartId;
pub use money::Money;
pub use sku::{Sku, SkuOrder};
