use std::sync::Arc;

use anyhow::Context;

use storefront_app::{Storefront, StorefrontConfig};
use storefront_cart::{Cart, CartAction};
use storefront_catalog::Catalog;
use storefront_core::{CartId, Sku};
use storefront_store::{CartHandle, CartStore};

fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env();
    storefront_observability::init(config.log_format);
    config.log_fallbacks();

    let catalog = Arc::new(Catalog::seed().context("load seed catalog")?);
    let cart_id = CartId::new();
    let store = Arc::new(CartStore::in_memory(Cart::with_policy(
        cart_id,
        config.quantity_policy,
    )));
    let events = store.subscribe();

    tracing::info!(
        cart = %cart_id,
        policy = %config.quantity_policy,
        products = catalog.len(),
        "storefront demo starting"
    );

    let handle: Arc<dyn CartHandle> = store.clone();
    let mut storefront = Storefront::new(Arc::clone(&catalog), handle);

    let ghana: Sku = "item0001".parse().context("seed sku")?;
    let amani: Sku = "item0002".parse().context("seed sku")?;

    storefront.add_to_cart(&ghana).context("add Ghana Babe")?;
    storefront.add_to_cart(&ghana).context("add Ghana Babe again")?;
    storefront.add_to_cart(&amani).context("add Amani Robe")?;
    tracing::info!(screen = %storefront.screen()?, "after adding");

    storefront
        .cart()
        .dispatch_action(CartAction::quantity(ghana.as_str(), 5))
        .context("set Ghana Babe quantity")?;
    storefront
        .cart()
        .dispatch_action(CartAction::remove(amani.as_str()))
        .context("remove Amani Robe")?;

    storefront.toggle_view();
    tracing::info!(screen = %storefront.screen()?, "cart view");

    storefront
        .cart()
        .dispatch_action(CartAction::submit())
        .context("submit cart")?;
    storefront.toggle_view();
    tracing::info!(screen = %storefront.screen()?, "after submit");

    for envelope in events.drain() {
        tracing::info!(
            sequence = envelope.sequence(),
            event_type = envelope.event_type(),
            "cart event"
        );
    }

    Ok(())
}
