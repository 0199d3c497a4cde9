use stockorder_core::{StoreError, StoreResult};
use stockorder_products::{CatalogProduct, ProductCatalog, ProductId, StockUpdate};

use super::table::InMemoryTable;

/// In-memory product catalog for tests/dev.
///
/// A stock-update batch is applied under one write lock and only if every
/// product in it exists, so a batch lands entirely or not at all. Stock levels
/// are overwritten with the given values; there is no check against what the
/// writer originally read.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    table: InMemoryTable<ProductId, CatalogProduct>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a product (price, stock, name).
    pub fn put(&self, product: CatalogProduct) -> StoreResult<()> {
        tracing::debug!(
            "catalog put {} (price {}, qty {})",
            product.id_typed(),
            product.unit_price(),
            product.quantity()
        );
        self.table.upsert(product.id_typed(), product)
    }

    pub fn get(&self, id: ProductId) -> StoreResult<Option<CatalogProduct>> {
        self.table.get(&id)
    }

    /// Change the catalog price of an existing product.
    pub fn reprice(&self, id: ProductId, unit_price: u64) -> StoreResult<()> {
        let mut map = self.table.write()?;
        let product = map
            .get_mut(&id)
            .ok_or_else(|| StoreError::conflict(format!("unknown product {id}")))?;
        *product = product.with_unit_price(unit_price);
        Ok(())
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn find_all_by_id(&self, ids: &[ProductId]) -> StoreResult<Vec<CatalogProduct>> {
        self.table.get_many(ids)
    }

    fn update_quantity(&self, updates: &[StockUpdate]) -> StoreResult<()> {
        let mut map = self.table.write()?;

        if let Some(missing) = updates.iter().find(|u| !map.contains_key(&u.product_id)) {
            return Err(StoreError::conflict(format!(
                "stock update for unknown product {}",
                missing.product_id
            )));
        }

        for update in updates {
            if let Some(product) = map.get_mut(&update.product_id) {
                *product = product.with_quantity(update.new_quantity);
            }
        }

        tracing::debug!("applied {} stock update(s)", updates.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: u64, qty: u64) -> CatalogProduct {
        CatalogProduct::new(ProductId::generate(), "Widget", price, qty).unwrap()
    }

    #[test]
    fn find_all_by_id_returns_only_matches() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = product(1000, 5);
        catalog.put(p1.clone()).unwrap();

        let found = catalog
            .find_all_by_id(&[ProductId::generate(), p1.id_typed()])
            .unwrap();
        assert_eq!(found, vec![p1]);
    }

    #[test]
    fn update_quantity_overwrites_stock() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = product(1000, 5);
        catalog.put(p1.clone()).unwrap();

        catalog
            .update_quantity(&[StockUpdate {
                product_id: p1.id_typed(),
                new_quantity: 2,
            }])
            .unwrap();

        let stored = catalog.get(p1.id_typed()).unwrap().unwrap();
        assert_eq!(stored.quantity(), 2);
        assert_eq!(stored.unit_price(), 1000);
    }

    #[test]
    fn update_batch_with_unknown_product_changes_nothing() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = product(1000, 5);
        catalog.put(p1.clone()).unwrap();

        let err = catalog
            .update_quantity(&[
                StockUpdate {
                    product_id: p1.id_typed(),
                    new_quantity: 0,
                },
                StockUpdate {
                    product_id: ProductId::generate(),
                    new_quantity: 1,
                },
            ])
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(catalog.get(p1.id_typed()).unwrap().unwrap().quantity(), 5);
    }

    #[test]
    fn reprice_changes_price_only() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = product(1000, 5);
        catalog.put(p1.clone()).unwrap();

        catalog.reprice(p1.id_typed(), 1200).unwrap();

        let stored = catalog.get(p1.id_typed()).unwrap().unwrap();
        assert_eq!(stored.unit_price(), 1200);
        assert_eq!(stored.quantity(), 5);
        assert!(catalog.reprice(ProductId::generate(), 1).is_err());
    }
}
