//! Create-sales-order use case.
//!
//! ```text
//! OrderRequest
//!   ↓
//! 1. Resolve customer               (absent → CustomerNotFound, stop)
//!   ↓
//! 2. Bulk-resolve requested products (one catalog call)
//!   ↓
//! 3. Price + check every line in input order
//!      missing → ProductNotFound, short → InsufficientStock (stop, nothing written)
//!   ↓
//! 4. Write new stock levels          (one batched call)
//!   ↓
//! 5. Persist order                   (order store assigns id + timestamp)
//! ```
//!
//! Steps 4 and 5 are separate writes to separate ports. If step 5 fails the
//! stock stays decremented. Nothing here guards against two concurrent
//! requests reading the same stock level in step 2 either: both pass the
//! check and the later stock write wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockorder_parties::{CustomerId, CustomerLookup};
use stockorder_products::{CatalogProduct, ProductCatalog, ProductId, StockUpdate};

use crate::error::CreateOrderError;
use crate::order::{NewOrder, Order, OrderLine, OrderStore};

/// One requested line: which product, how many units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedLine {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Input to [`CreateSalesOrder::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_id: CustomerId,
    pub lines: Vec<RequestedLine>,
}

impl OrderRequest {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, product_id: ProductId, quantity: u64) -> Self {
        self.lines.push(RequestedLine {
            product_id,
            quantity,
        });
        self
    }

    /// Distinct product ids, in order of first appearance.
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if !ids.contains(&line.product_id) {
                ids.push(line.product_id);
            }
        }
        ids
    }
}

/// Priced lines plus the stock writes that go with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderPlan {
    pub(crate) lines: Vec<OrderLine>,
    /// One entry per requested line, in input order.
    pub(crate) stock_updates: Vec<StockUpdate>,
}

/// Price and stock-check `requested` against the products the catalog returned.
///
/// Lines are processed strictly in input order and the first violation wins.
/// Every line is checked against the quantity the catalog returned, so a
/// product repeated on several lines is not drawn down cumulatively: each
/// line yields its own stock update and the last one written wins.
pub(crate) fn plan_order(
    requested: &[RequestedLine],
    found: &[CatalogProduct],
) -> Result<OrderPlan, CreateOrderError> {
    let catalog: HashMap<ProductId, &CatalogProduct> =
        found.iter().map(|p| (p.id_typed(), p)).collect();

    let mut lines = Vec::with_capacity(requested.len());
    let mut stock_updates = Vec::with_capacity(requested.len());

    for line in requested {
        if line.quantity == 0 {
            return Err(CreateOrderError::validation(format!(
                "quantity must be positive (product {})",
                line.product_id
            )));
        }

        let product = catalog
            .get(&line.product_id)
            .ok_or(CreateOrderError::ProductNotFound(line.product_id))?;

        let new_quantity = product.remaining_after(line.quantity).ok_or(
            CreateOrderError::InsufficientStock {
                product_id: line.product_id,
                requested: line.quantity,
                available: product.quantity(),
            },
        )?;

        lines.push(OrderLine {
            product_id: line.product_id,
            unit_price: product.unit_price(),
            quantity: line.quantity,
        });
        stock_updates.push(StockUpdate {
            product_id: line.product_id,
            new_quantity,
        });
    }

    Ok(OrderPlan {
        lines,
        stock_updates,
    })
}

/// Application service: create a sales order against live stock.
///
/// Stateless apart from its injected ports, so one instance can serve
/// concurrent requests (wrap it in `Arc`).
#[derive(Debug)]
pub struct CreateSalesOrder<C, P, O> {
    customers: C,
    catalog: P,
    orders: O,
}

impl<C, P, O> CreateSalesOrder<C, P, O> {
    pub fn new(customers: C, catalog: P, orders: O) -> Self {
        Self {
            customers,
            catalog,
            orders,
        }
    }

    pub fn into_parts(self) -> (C, P, O) {
        (self.customers, self.catalog, self.orders)
    }
}

impl<C, P, O> CreateSalesOrder<C, P, O>
where
    C: CustomerLookup,
    P: ProductCatalog,
    O: OrderStore,
{
    /// Validate, price, decrement stock and persist.
    ///
    /// Returns the order as persisted by the order store. No write happens
    /// unless the customer exists and every line passes; store failures are
    /// propagated as [`CreateOrderError::Store`] without retry.
    pub fn execute(&self, request: &OrderRequest) -> Result<Order, CreateOrderError> {
        let customer_id = request.customer_id;

        // 1) Customer must exist before anything else is touched.
        let customer = match self.customers.find_by_id(customer_id)? {
            Some(customer) => customer,
            None => {
                tracing::warn!("order rejected: customer {} not found", customer_id);
                return Err(CreateOrderError::CustomerNotFound(customer_id));
            }
        };

        if request.lines.is_empty() {
            tracing::warn!("order rejected: no lines (customer {})", customer_id);
            return Err(CreateOrderError::validation("order must contain at least one line"));
        }

        // 2) One bulk read for every requested product.
        let ids = request.product_ids();
        let found = self.catalog.find_all_by_id(&ids)?;
        tracing::debug!(
            "catalog returned {} of {} requested products",
            found.len(),
            ids.len()
        );

        // 3) Price and check in input order (no writes yet).
        let plan = plan_order(&request.lines, &found).inspect_err(|e| {
            tracing::warn!("order rejected for customer {}: {}", customer_id, e);
        })?;

        // 4) Single batched stock write.
        self.catalog.update_quantity(&plan.stock_updates)?;

        // 5) Persist. Stock is already decremented if this fails.
        let order = self
            .orders
            .create(NewOrder {
                customer,
                lines: plan.lines,
            })
            .inspect_err(|e| {
                tracing::error!(
                    "order create failed after stock update for customer {}: {}",
                    customer_id,
                    e
                );
            })?;

        tracing::info!(
            order_id = %order.id_typed(),
            customer_id = %customer_id,
            lines = order.lines().len(),
            "sales order created"
        );

        Ok(order)
    }
}
