//! Product catalog (read-only).
//!
//! The catalog is built once from a seed list, validated, and never mutated.

pub mod product;

pub use product::{Catalog, Product};
