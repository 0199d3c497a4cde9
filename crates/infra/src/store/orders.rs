use chrono::Utc;

use stockorder_core::{StoreError, StoreResult};
use stockorder_parties::CustomerId;
use stockorder_sales::{NewOrder, Order, OrderId, OrderStore};

use super::table::InMemoryTable;

/// In-memory order store for tests/dev.
///
/// Identity is a fresh UUIDv7 and `created_at` is the wall clock at insert.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    table: InMemoryTable<OrderId, Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All orders, oldest first.
    pub fn list(&self) -> StoreResult<Vec<Order>> {
        let mut orders = self.table.list()?;
        orders.sort_by_key(|o| (o.created_at(), o.id_typed()));
        Ok(orders)
    }

    /// Orders placed by one customer, oldest first.
    pub fn list_for_customer(&self, customer_id: CustomerId) -> StoreResult<Vec<Order>> {
        let mut orders = self.list()?;
        orders.retain(|o| o.customer_id() == customer_id);
        Ok(orders)
    }

    pub fn len(&self) -> StoreResult<usize> {
        self.table.len()
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        self.table.is_empty()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, input: NewOrder) -> StoreResult<Order> {
        let order = Order::new(
            OrderId::generate(),
            input.customer.id_typed(),
            input.lines,
            Utc::now(),
        );

        if !self.table.insert_new(order.id_typed(), order.clone())? {
            return Err(StoreError::conflict(format!(
                "order id already taken: {}",
                order.id_typed()
            )));
        }

        tracing::debug!("stored order {}", order.id_typed());
        Ok(order)
    }

    fn find_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        self.table.get(&id)
    }
}
