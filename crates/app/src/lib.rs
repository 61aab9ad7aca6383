//! Storefront composition: configuration plus a thin view model over the
//! catalog and the cart store.

pub mod config;
pub mod view;

pub use config::{ConfigFallback, StorefrontConfig};
pub use view::{Body, Footer, Header, Screen, Storefront, View};
