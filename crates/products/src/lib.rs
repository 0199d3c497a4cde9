//! Products domain module (catalog and stock).
//!
//! This crate contains the sellable product as the ordering flow sees it
//! (price + available stock) and the catalog port used to read and
//! decrement it. Pure domain logic; storage lives in infra.

pub mod catalog;

pub use catalog::{CatalogProduct, ProductCatalog, ProductId, StockUpdate};
