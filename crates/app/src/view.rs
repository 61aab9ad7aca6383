//! View model: which page is open and what it shows.
//!
//! Rendering is left to whatever front end consumes [`Screen`]; the
//! `Display` impl is a plain-text rendering used by the demo binary.

use std::sync::Arc;

use serde::Serialize;

use storefront_cart::{AddItem, CartCommand, CartEvent};
use storefront_catalog::Catalog;
use storefront_core::{DomainError, Sku};
use storefront_store::{CartHandle, DispatchError};

pub const TITLE: &str = "Storefront";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Products,
    Cart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTile {
    pub sku: Sku,
    pub name: String,
    pub price: String,
    pub in_cart: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub sku: Sku,
    pub name: String,
    pub price: String,
    pub qty: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum Body {
    Products {
        tiles: Vec<ProductTile>,
    },
    Cart {
        lines: Vec<CartLineView>,
        total_items: u64,
        total_price: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub total_items: String,
    pub total_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub header: Header,
    pub body: Body,
    pub footer: Option<Footer>,
}

/// Composes the catalog and an injected cart handle into screens.
pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: Arc<dyn CartHandle>,
    view: View,
}

impl Storefront {
    pub fn new(catalog: Arc<Catalog>, cart: Arc<dyn CartHandle>) -> Self {
        Self {
            catalog,
            cart,
            view: View::default(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn toggle_view(&mut self) -> View {
        self.view = match self.view {
            View::Products => View::Cart,
            View::Cart => View::Products,
        };
        self.view
    }

    pub fn cart(&self) -> &Arc<dyn CartHandle> {
        &self.cart
    }

    /// "Add to cart" on a catalog tile.
    pub fn add_to_cart(&self, sku: &Sku) -> Result<Vec<CartEvent>, DispatchError> {
        let product = self
            .catalog
            .find(sku)
            .ok_or_else(|| DomainError::validation(format!("{sku} is not in the catalog")))?;
        self.cart.dispatch(CartCommand::Add(AddItem::from(product)))
    }

    pub fn screen(&self) -> Result<Screen, DispatchError> {
        let summary = self.cart.summary()?;

        let header = Header {
            title: TITLE,
            toggle_label: match self.view {
                View::Products => "View Cart",
                View::Cart => "View Products",
            },
        };

        let body = match self.view {
            View::Products => Body::Products {
                tiles: self
                    .catalog
                    .products()
                    .iter()
                    .map(|p| ProductTile {
                        sku: p.sku.clone(),
                        name: p.name.clone(),
                        price: p.price.to_string(),
                        in_cart: summary.lines.iter().any(|l| l.sku == p.sku),
                    })
                    .collect(),
            },
            View::Cart => Body::Cart {
                lines: summary
                    .lines
                    .iter()
                    .map(|l| CartLineView {
                        sku: l.sku.clone(),
                        name: l.name.clone(),
                        price: l.price.to_string(),
                        qty: l.qty,
                        line_total: l.line_total().to_string(),
                    })
                    .collect(),
                total_items: summary.total_items,
                total_price: summary.formatted_total(),
            },
        };

        let footer = (self.view != View::Cart).then(|| Footer {
            total_items: format!("Total Items: {}", summary.total_items),
            total_price: format!("Total Price: {}", summary.formatted_total()),
        });

        Ok(Screen {
            header,
            body,
            footer,
        })
    }
}

impl core::fmt::Display for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{} [{}]", self.header.title, self.header.toggle_label)?;

        match &self.body {
            Body::Products { tiles } => {
                for tile in tiles {
                    let marker = if tile.in_cart { " (in cart)" } else { "" };
                    writeln!(f, "  {} {} {}{marker}", tile.sku, tile.name, tile.price)?;
                }
            }
            Body::Cart {
                lines,
                total_items,
                total_price,
            } => {
                if lines.is_empty() {
                    writeln!(f, "  cart is empty")?;
                }
                for line in lines {
                    writeln!(
                        f,
                        "  {} {} {} x{} = {}",
                        line.sku, line.name, line.price, line.qty, line.line_total
                    )?;
                }
                writeln!(f, "  items: {total_items}  total: {total_price}")?;
            }
        }

        if let Some(footer) = &self.footer {
            writeln!(f, "{}  {}", footer.total_items, footer.total_price)?;
        }
        Ok(())
    }
}
