use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockorder_core::{DomainError, DomainResult, Entity, StoreResult, ValueObject, typed_id};

typed_id!(
    /// Product identifier.
    ProductId
);

/// Entity: a sellable product with its current price and available stock.
///
/// A value read from the catalog is a snapshot: nothing locks the row, so it
/// may be stale as soon as it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    id: ProductId,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
    /// Units available for sale.
    quantity: u64,
}

impl CatalogProduct {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: u64,
        quantity: u64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        Ok(Self {
            id,
            name,
            unit_price,
            quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Stock left after taking `requested` units, or `None` when the product
    /// does not have that many. Taking exactly the available stock yields `Some(0)`.
    pub fn remaining_after(&self, requested: u64) -> Option<u64> {
        self.quantity.checked_sub(requested)
    }

    /// Copy of this product with a different stock level.
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Copy of this product with a different catalog price.
    pub fn with_unit_price(&self, unit_price: u64) -> Self {
        Self {
            unit_price,
            ..self.clone()
        }
    }
}

impl Entity for CatalogProduct {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Instruction to overwrite a product's stock level.
///
/// This is an absolute value, not a delta: the writer has already computed
/// the remaining quantity from the stock it read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub product_id: ProductId,
    pub new_quantity: u64,
}

impl ValueObject for StockUpdate {}

/// Catalog port: bulk reads and batched stock writes.
pub trait ProductCatalog: Send + Sync {
    /// Resolve many products in one round-trip.
    ///
    /// Only products that exist are returned, in no particular order. Callers
    /// detect missing ids by comparing against what they asked for.
    fn find_all_by_id(&self, ids: &[ProductId]) -> StoreResult<Vec<CatalogProduct>>;

    /// Overwrite stock levels for every product in `updates`.
    fn update_quantity(&self, updates: &[StockUpdate]) -> StoreResult<()>;
}

impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    fn find_all_by_id(&self, ids: &[ProductId]) -> StoreResult<Vec<CatalogProduct>> {
        (**self).find_all_by_id(ids)
    }

    fn update_quantity(&self, updates: &[StockUpdate]) -> StoreResult<()> {
        (**self).update_quantity(updates)
    }
}
