//! Stock keeping unit identifier and its presentation order.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of trailing digits that make up a sku's numeric suffix.
pub const SUFFIX_LEN: usize = 4;

/// Unique, stable product identifier (e.g. `item0001`).
///
/// Any non-empty string is a valid sku. Skus that end in a four digit suffix
/// sort by that number; see [`Sku::sort_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

/// Sort key derived from a sku.
///
/// Numeric suffixes come first, ordered by value; skus without one follow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkuOrder {
    Numeric(u32),
    Unsuffixed,
}

impl Sku {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("sku must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The integer value of the last four characters, if they are all digits.
    pub fn numeric_suffix(&self) -> Option<u32> {
        let (start, _) = self.0.char_indices().rev().nth(SUFFIX_LEN - 1)?;
        let suffix = &self.0[start..];
        if !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        suffix.parse().ok()
    }

    pub fn has_numeric_suffix(&self) -> bool {
        self.numeric_suffix().is_some()
    }

    pub fn sort_key(&self) -> SkuOrder {
        match self.numeric_suffix() {
            Some(n) => SkuOrder::Numeric(n),
            None => SkuOrder::Unsuffixed,
        }
    }

    /// Presentation order: by sort key, ties broken by the sku text.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.0
    }
}
