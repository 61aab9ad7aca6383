use std::sync::Arc;

use storefront_cart::{CartAction, CartCommand, CartEvent, CartLineItem, CartSummary};
use storefront_events::EventBus;

use crate::store::{CartEnvelope, CartStore, DispatchError};

/// What a consumer of cart state gets: a way to issue commands and read
/// derived values. Pass it around as `Arc<dyn CartHandle>`.
pub trait CartHandle: Send + Sync {
    fn dispatch(&self, command: CartCommand) -> Result<Vec<CartEvent>, DispatchError>;

    fn summary(&self) -> Result<Arc<CartSummary>, DispatchError>;

    /// Convert a loosely-typed action and dispatch it.
    fn dispatch_action(&self, action: CartAction) -> Result<Vec<CartEvent>, DispatchError> {
        let kind = action.kind.clone();
        let command = CartCommand::try_from(action).inspect_err(|err| {
            tracing::warn!(kind = %kind, error = %err, "cart action rejected");
        })?;
        self.dispatch(command)
    }

    /// Lines in presentation order.
    fn cart(&self) -> Result<Vec<CartLineItem>, DispatchError> {
        Ok(self.summary()?.lines.clone())
    }

    fn total_items(&self) -> Result<u64, DispatchError> {
        Ok(self.summary()?.total_items)
    }

    /// Formatted currency total, e.g. `$39.97`.
    fn total_price(&self) -> Result<String, DispatchError> {
        Ok(self.summary()?.formatted_total())
    }
}

impl<B> CartHandle for CartStore<B>
where
    B: EventBus<CartEnvelope>,
{
    fn dispatch(&self, command: CartCommand) -> Result<Vec<CartEvent>, DispatchError> {
        CartStore::dispatch(self, command)
    }

    fn summary(&self) -> Result<Arc<CartSummary>, DispatchError> {
        CartStore::summary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_cart::Cart;
    use storefront_core::{CartId, DomainError};

    fn handle() -> Arc<dyn CartHandle> {
        Arc::new(CartStore::in_memory(Cart::empty(CartId::new())))
    }

    #[test]
    fn actions_flow_through_a_shared_handle() {
        let handle = handle();
        let other_view = Arc::clone(&handle);

        handle.dispatch_action(CartAction::add("item0002", "Amani Robe", 19.99)).unwrap();
        handle.dispatch_action(CartAction::add("item0001", "Ghana Babe", 9.99)).unwrap();

        assert_eq!(other_view.total_items().unwrap(), 2);
        assert_eq!(other_view.total_price().unwrap(), "$29.98");

        let skus: Vec<String> = other_view
            .cart()
            .unwrap()
            .into_iter()
            .map(|l| l.sku.to_string())
            .collect();
        assert_eq!(skus, vec!["item0001", "item0002"]);
    }

    #[test]
    fn bad_actions_surface_domain_errors() {
        let handle = handle();

        let err = handle
            .dispatch_action(CartAction {
                kind: "CHECKOUT".into(),
                payload: None,
            })
            .unwrap_err();
        assert_eq!(err, DispatchError::Domain(DomainError::unrecognized("CHECKOUT")));

        let err = handle
            .dispatch_action(CartAction {
                kind: "ADD".into(),
                payload: None,
            })
            .unwrap_err();
        assert_eq!(err, DispatchError::Domain(DomainError::missing_payload("ADD")));

        assert_eq!(handle.total_items().unwrap(), 0);
    }
}
