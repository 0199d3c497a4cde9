//! Use-case error model.

use thiserror::Error;

use stockorder_core::StoreError;
use stockorder_parties::CustomerId;
use stockorder_products::ProductId;

use crate::order::OrderId;

/// Coarse classification of a [`CreateOrderError`].
///
/// An outer layer (HTTP, RPC, CLI) maps these to its own status vocabulary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrderErrorKind {
    CustomerNotFound,
    ProductNotFound,
    InsufficientStock,
    Validation,
    Store,
}

impl OrderErrorKind {
    /// Stable machine-readable code.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderErrorKind::CustomerNotFound => "customer_not_found",
            OrderErrorKind::ProductNotFound => "product_not_found",
            OrderErrorKind::InsufficientStock => "insufficient_stock",
            OrderErrorKind::Validation => "validation_error",
            OrderErrorKind::Store => "store_error",
        }
    }

    /// Caller-correctable failure (4xx-equivalent). Only store failures are not.
    pub fn is_client_error(self) -> bool {
        !matches!(self, OrderErrorKind::Store)
    }
}

impl core::fmt::Display for OrderErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of [`crate::CreateSalesOrder::execute`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateOrderError {
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error(
        "insufficient stock for product {product_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },

    #[error("invalid order request: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CreateOrderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> OrderErrorKind {
        match self {
            CreateOrderError::CustomerNotFound(_) => OrderErrorKind::CustomerNotFound,
            CreateOrderError::ProductNotFound(_) => OrderErrorKind::ProductNotFound,
            CreateOrderError::InsufficientStock { .. } => OrderErrorKind::InsufficientStock,
            CreateOrderError::Validation(_) => OrderErrorKind::Validation,
            CreateOrderError::Store(_) => OrderErrorKind::Store,
        }
    }
}

/// Failure of [`crate::GetSalesOrder::execute`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetOrderError {
    #[error("order not found: {0}")]
    NotFound(OrderId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
