use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, Sku};

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    /// Unit price in cents.
    pub price: Money,
}

impl Product {
    pub fn new(sku: Sku, name: impl Into<String>, price: Money) -> Self {
        Self {
            sku,
            name: name.into(),
            price,
        }
    }
}

const SEED: &str = r#"[
    {"sku": "item0001", "name": "Ghana Babe", "price": 999},
    {"sku": "item0002", "name": "Amani Robe", "price": 1999},
    {"sku": "item0003", "name": "Naija Babe", "price": 2999}
]"#;

/// Validated, immutable product list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate skus and skus that lack a four
    /// digit numeric suffix (the cart orders lines by that suffix).
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !product.sku.has_numeric_suffix() {
                return Err(DomainError::validation(format!(
                    "sku {} must end in a 4-digit number",
                    product.sku
                )));
            }
            if !seen.insert(&product.sku) {
                return Err(DomainError::validation(format!(
                    "duplicate sku {}",
                    product.sku
                )));
            }
            if product.name.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.sku
                )));
            }
        }

        tracing::debug!(products = products.len(), "catalog validated");
        Ok(Self { products })
    }

    /// Parse a JSON array of `{ "sku", "name", "price" }` objects.
    ///
    /// `price` is in cents, matching [`Money`]'s serialized form.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid catalog json: {e}")))?;
        Self::new(products)
    }

    /// The storefront's fixed product list, validated like any other.
    pub fn seed() -> DomainResult<Self> {
        Self::from_json(SEED)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, sku: &Sku) -> Option<&Product> {
        self.products.iter().find(|p| &p.sku == sku)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
