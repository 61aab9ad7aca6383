use serde::{Deserialize, Serialize};

use storefront_core::{Aggregate, Money};

use crate::cart::{Cart, CartLineItem};

/// Derived, read-only view of a cart at one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub version: u64,
    /// Lines in presentation order.
    pub lines: Vec<CartLineItem>,
    pub total_items: u64,
    pub total_price: Money,
}

impl CartSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            version: cart.version(),
            lines: cart.sorted_lines(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }

    /// Currency string for the total, e.g. `$69.94`.
    pub fn formatted_total(&self) -> String {
        self.total_price.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
