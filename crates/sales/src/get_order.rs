//! Read a persisted sales order back by id.

use crate::error::GetOrderError;
use crate::order::{Order, OrderId, OrderStore};

#[derive(Debug)]
pub struct GetSalesOrder<O> {
    orders: O,
}

impl<O> GetSalesOrder<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }
}

impl<O: OrderStore> GetSalesOrder<O> {
    pub fn execute(&self, order_id: OrderId) -> Result<Order, GetOrderError> {
        match self.orders.find_by_id(order_id)? {
            Some(order) => Ok(order),
            None => {
                tracing::debug!("order {} not found", order_id);
                Err(GetOrderError::NotFound(order_id))
            }
        }
    }
}
