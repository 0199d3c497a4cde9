//! Sales orders domain module.
//!
//! Holds the order model, the order store port and the two application use
//! cases built on top of the customer, catalog and order ports:
//!
//! - [`CreateSalesOrder`]: validate customer, price lines from the catalog,
//!   decrement stock, persist.
//! - [`GetSalesOrder`]: read a persisted order back.
//!
//! No IO happens here; every side effect goes through an injected port.

pub mod create_order;
pub mod error;
pub mod get_order;
pub mod order;

pub use create_order::{CreateSalesOrder, OrderRequest, RequestedLine};
pub use error::{CreateOrderError, GetOrderError, OrderErrorKind};
pub use get_order::GetSalesOrder;
pub use order::{NewOrder, Order, OrderId, OrderLine, OrderStore};
