use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{Aggregate, CartId, DomainError, Money, Sku};
use storefront_events::Event;

use crate::policy::{QuantityChange, QuantityPolicy};
use crate::summary::CartSummary;

/// One distinct product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub sku: Sku,
    pub name: String,
    /// Unit price, copied when the item was added.
    pub price: Money,
    pub qty: u32,
}

impl CartLineItem {
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.qty)
    }
}

/// Aggregate root: Cart.
///
/// Holds at most one line per sku. Lines are kept in storage order (a line
/// that is replaced moves to the end); use [`Cart::sorted_lines`] for the
/// presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLineItem>,
    policy: QuantityPolicy,
    version: u64,
}

impl Cart {
    /// Create an empty cart with the default quantity policy.
    pub fn empty(id: CartId) -> Self {
        Self::with_policy(id, QuantityPolicy::default())
    }

    pub fn with_policy(id: CartId, policy: QuantityPolicy) -> Self {
        Self {
            id,
            lines: Vec::new(),
            policy,
            version: 0,
        }
    }

    pub fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn line(&self, sku: &Sku) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| &l.sku == sku)
    }

    pub fn contains(&self, sku: &Sku) -> bool {
        self.line(sku).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities; 0 for an empty cart.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.qty)).sum()
    }

    /// Sum of `qty * price` over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// Lines ordered by the numeric suffix of their sku.
    pub fn sorted_lines(&self) -> Vec<CartLineItem> {
        let mut sorted = self.lines.clone();
        sorted.sort_by(|a, b| a.sku.display_cmp(&b.sku));
        sorted
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(self)
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub sku: Sku,
    pub name: String,
    pub price: Money,
}

impl From<&Product> for AddItem {
    fn from(product: &Product) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub sku: Sku,
}

/// Command: SetQuantity.
///
/// `qty` is signed so that non-positive requests reach the cart's
/// [`QuantityPolicy`] instead of being lost in a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuantity {
    pub sku: Sku,
    pub qty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    Add(AddItem),
    Remove(RemoveItem),
    SetQuantity(SetQuantity),
    Submit,
}

impl CartCommand {
    /// Action name as used on the wire (`ADD`, `REMOVE`, `QUANTITY`, `SUBMIT`).
    pub fn kind(&self) -> &'static str {
        match self {
            CartCommand::Add(_) => crate::action::kind::ADD,
            CartCommand::Remove(_) => crate::action::kind::REMOVE,
            CartCommand::SetQuantity(_) => crate::action::kind::QUANTITY,
            CartCommand::Submit => crate::action::kind::SUBMIT,
        }
    }
}

/// Event: ItemAdded. Carries the full replacement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub line: CartLineItem,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub sku: Sku,
}

/// Event: QuantityChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub sku: Sku,
    pub qty: u32,
}

/// Event: CartSubmitted. Snapshot of what was checked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSubmitted {
    pub lines: Vec<CartLineItem>,
    pub total_items: u64,
    pub total_price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    QuantityChanged(QuantityChanged),
    CartSubmitted(CartSubmitted),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::QuantityChanged(_) => "cart.item.quantity_changed",
            CartEvent::CartSubmitted(_) => "cart.submitted",
        }
    }
}

impl Aggregate for Cart {
    type Id = CartId;
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn id(&self) -> CartId {
        self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.lines.retain(|l| l.sku != e.line.sku);
                self.lines.push(e.line.clone());
            }
            CartEvent::ItemRemoved(e) => {
                self.lines.retain(|l| l.sku != e.sku);
            }
            CartEvent::QuantityChanged(e) => {
                if let Some(pos) = self.lines.iter().position(|l| l.sku == e.sku) {
                    let mut line = self.lines.remove(pos);
                    line.qty = e.qty;
                    self.lines.push(line);
                }
            }
            CartEvent::CartSubmitted(_) => {
                self.lines.clear();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::Add(cmd) => self.handle_add(cmd),
            CartCommand::Remove(cmd) => self.handle_remove(cmd),
            CartCommand::SetQuantity(cmd) => self.handle_set_quantity(cmd),
            CartCommand::Submit => self.handle_submit(),
        }
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        let qty = match self.line(&cmd.sku) {
            Some(existing) => existing
                .qty
                .checked_add(1)
                .ok_or_else(|| DomainError::validation(format!("quantity of {} overflows", cmd.sku)))?,
            None => 1,
        };

        Ok(vec![CartEvent::ItemAdded(ItemAdded {
            line: CartLineItem {
                sku: cmd.sku.clone(),
                name: cmd.name.clone(),
                price: cmd.price,
                qty,
            },
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        if !self.contains(&cmd.sku) {
            return Ok(vec![]);
        }

        Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
            sku: cmd.sku.clone(),
        })])
    }

    fn handle_set_quantity(&self, cmd: &SetQuantity) -> Result<Vec<CartEvent>, DomainError> {
        if !self.contains(&cmd.sku) {
            return Err(DomainError::item_not_found(cmd.sku.clone()));
        }

        let event = match self.policy.resolve(cmd.qty)? {
            QuantityChange::Set(qty) => CartEvent::QuantityChanged(QuantityChanged {
                sku: cmd.sku.clone(),
                qty,
            }),
            QuantityChange::Remove => CartEvent::ItemRemoved(ItemRemoved {
                sku: cmd.sku.clone(),
            }),
        };

        Ok(vec![event])
    }

    fn handle_submit(&self) -> Result<Vec<CartEvent>, DomainError> {
        Ok(vec![CartEvent::CartSubmitted(CartSubmitted {
            lines: self.sorted_lines(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        })])
    }
}
