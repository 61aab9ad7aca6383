//! Tracing/logging setup shared by storefront binaries.

pub mod tracing;

pub use self::tracing::{LogFormat, init};
