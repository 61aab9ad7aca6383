//! Loosely-typed cart actions as they arrive from a UI event or JSON.
//!
//! Shape: `{ "type": "ADD", "payload": { "sku": "...", "name": "...", "price": 9.99 } }`.
//! [`CartCommand::try_from`] turns one into a typed command or reports what
//! was wrong with it.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, Sku};

use crate::cart::{AddItem, CartCommand, RemoveItem, SetQuantity};

/// Action type names.
pub mod kind {
    pub const ADD: &str = "ADD";
    pub const REMOVE: &str = "REMOVE";
    pub const QUANTITY: &str = "QUANTITY";
    pub const SUBMIT: &str = "SUBMIT";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ActionPayload>,
}

/// Every field is optional on the wire; each action checks for the ones it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price in dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,
}

impl CartAction {
    pub fn add(sku: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self::with_payload(
            kind::ADD,
            ActionPayload {
                sku: Some(sku.into()),
                name: Some(name.into()),
                price: Some(price),
                ..ActionPayload::default()
            },
        )
    }

    pub fn remove(sku: impl Into<String>) -> Self {
        Self::with_payload(
            kind::REMOVE,
            ActionPayload {
                sku: Some(sku.into()),
                ..ActionPayload::default()
            },
        )
    }

    pub fn quantity(sku: impl Into<String>, qty: i64) -> Self {
        Self::with_payload(
            kind::QUANTITY,
            ActionPayload {
                sku: Some(sku.into()),
                qty: Some(qty),
                ..ActionPayload::default()
            },
        )
    }

    pub fn submit() -> Self {
        Self {
            kind: kind::SUBMIT.to_string(),
            payload: None,
        }
    }

    fn with_payload(kind: &str, payload: ActionPayload) -> Self {
        Self {
            kind: kind.to_string(),
            payload: Some(payload),
        }
    }
}

fn required<T>(field: Option<T>, action: &'static str) -> DomainResult<T> {
    field.ok_or(DomainError::missing_payload(action))
}

impl TryFrom<CartAction> for CartCommand {
    type Error = DomainError;

    fn try_from(action: CartAction) -> Result<Self, Self::Error> {
        match action.kind.as_str() {
            kind::ADD => {
                let payload = required(action.payload, kind::ADD)?;
                let sku = Sku::new(required(payload.sku, kind::ADD)?)?;
                let name = required(payload.name, kind::ADD)?;
                let price = Money::from_dollars(required(payload.price, kind::ADD)?)?;
                Ok(CartCommand::Add(AddItem { sku, name, price }))
            }
            kind::REMOVE => {
                let payload = required(action.payload, kind::REMOVE)?;
                let sku = Sku::new(required(payload.sku, kind::REMOVE)?)?;
                Ok(CartCommand::Remove(RemoveItem { sku }))
            }
            kind::QUANTITY => {
                let payload = required(action.payload, kind::QUANTITY)?;
                let sku = Sku::new(required(payload.sku, kind::QUANTITY)?)?;
                let qty = required(payload.qty, kind::QUANTITY)?;
                Ok(CartCommand::SetQuantity(SetQuantity { sku, qty }))
            }
            kind::SUBMIT => Ok(CartCommand::Submit),
            other => Err(DomainError::unrecognized(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(json: &str) -> DomainResult<CartCommand> {
        let action: CartAction = serde_json::from_str(json).unwrap();
        CartCommand::try_from(action)
    }

    #[test]
    fn add_action_converts_price_to_cents() {
        let cmd = convert(
            r#"{"type": "ADD", "payload": {"sku": "item0001", "name": "Ghana Babe", "price": 9.99}}"#,
        )
        .unwrap();

        match cmd {
            CartCommand::Add(add) => {
                assert_eq!(add.sku.as_str(), "item0001");
                assert_eq!(add.name, "Ghana Babe");
                assert_eq!(add.price, Money::from_cents(999));
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn missing_payload_is_reported_per_action() {
        assert_eq!(
            convert(r#"{"type": "ADD"}"#),
            Err(DomainError::missing_payload("ADD"))
        );
        assert_eq!(
            convert(r#"{"type": "REMOVE", "payload": null}"#),
            Err(DomainError::missing_payload("REMOVE"))
        );
        assert_eq!(
            convert(r#"{"type": "QUANTITY"}"#),
            Err(DomainError::missing_payload("QUANTITY"))
        );
    }

    #[test]
    fn missing_required_fields_count_as_missing_payload() {
        assert_eq!(
            convert(r#"{"type": "ADD", "payload": {"sku": "item0001", "name": "Ghana Babe"}}"#),
            Err(DomainError::missing_payload("ADD"))
        );
        assert_eq!(
            convert(r#"{"type": "QUANTITY", "payload": {"sku": "item0001"}}"#),
            Err(DomainError::missing_payload("QUANTITY"))
        );
    }

    #[test]
    fn submit_needs_no_payload() {
        assert_eq!(convert(r#"{"type": "SUBMIT"}"#), Ok(CartCommand::Submit));
    }

    #[test]
    fn unknown_type_is_unrecognized() {
        assert_eq!(
            convert(r#"{"type": "CHECKOUT", "payload": {"sku": "item0001"}}"#),
            Err(DomainError::unrecognized("CHECKOUT"))
        );
        assert_eq!(
            convert(r#"{"type": "add"}"#),
            Err(DomainError::unrecognized("add"))
        );
    }

    #[test]
    fn malformed_values_fail_validation() {
        assert!(matches!(
            CartCommand::try_from(CartAction::add("item0001", "Ghana Babe", -1.0)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            CartCommand::try_from(CartAction::remove("")),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn constructors_produce_the_wire_shape() {
        let json = serde_json::to_value(CartAction::quantity("item0001", 5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "QUANTITY", "payload": {"sku": "item0001", "qty": 5}})
        );

        let json = serde_json::to_value(CartAction::submit()).unwrap();
        assert_eq!(json, serde_json::json!({"type": "SUBMIT"}));
    }
}
