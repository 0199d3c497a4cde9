use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockorder_core::{Entity, StoreResult, ValueObject, typed_id};
use stockorder_parties::{Customer, CustomerId};
use stockorder_products::ProductId;

typed_id!(
    /// Sales order identifier (assigned by the order store).
    OrderId
);

/// Order line: product, unit price captured at order time, quantity.
///
/// The price is a snapshot. Later catalog price changes never reach an
/// existing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub quantity: u64,
}

impl OrderLine {
    /// `unit_price * quantity`, or `None` on overflow.
    pub fn line_total(&self) -> Option<u64> {
        self.unit_price.checked_mul(self.quantity)
    }
}

impl ValueObject for OrderLine {}

/// Input to [`OrderStore::create`]: the validated customer and priced lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}

/// Persisted sales order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    lines: Vec<OrderLine>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Assemble a persisted order. Called by order stores once they have
    /// assigned identity and creation time.
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        lines: Vec<OrderLine>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            lines,
            created_at,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of line totals, or `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        self.lines
            .iter()
            .try_fold(0u64, |acc, line| acc.checked_add(line.line_total()?))
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Order persistence port.
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning its identity and creation timestamp.
    fn create(&self, input: NewOrder) -> StoreResult<Order>;

    fn find_by_id(&self, id: OrderId) -> StoreResult<Option<Order>>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, input: NewOrder) -> StoreResult<Order> {
        (**self).create(input)
    }

    fn find_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        (**self).find_by_id(id)
    }
}
