//! Why a cart command or action was refused.

use thiserror::Error;

use crate::sku::Sku;

pub type DomainResult<T> = Result<T, DomainError>;

/// Every variant aborts the command that produced it; none of them are
/// transient, so there is no retry path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An action that needs a payload (or a payload field) arrived without it.
    #[error("payload missing in {action} action")]
    MissingPayload { action: &'static str },

    /// A quantity update targeted a sku that is not in the cart.
    #[error("item must exist in order to update quantity: {0}")]
    ItemNotFound(Sku),

    /// An action kind outside the known set.
    #[error("unrecognized action type: {0}")]
    UnrecognizedCommand(String),

    /// A value failed validation (e.g. malformed input, rejected quantity).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn missing_payload(action: &'static str) -> Self {
        Self::MissingPayload { action }
    }

    pub fn item_not_found(sku: Sku) -> Self {
        Self::ItemNotFound(sku)
    }

    pub fn unrecognized(kind: impl Into<String>) -> Self {
        Self::UnrecognizedCommand(kind.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            DomainError::missing_payload("ADD").to_string(),
            "payload missing in ADD action"
        );
        assert_eq!(
            DomainError::unrecognized("CHECKOUT").to_string(),
            "unrecognized action type: CHECKOUT"
        );

        let sku: Sku = "item0009".parse().unwrap();
        assert_eq!(
            DomainError::item_not_found(sku).to_string(),
            "item must exist in order to update quantity: item0009"
        );
    }
}
