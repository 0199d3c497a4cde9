//! Infrastructure layer: storage adapters for the domain ports.
//!
//! Only in-memory backends live here for now (tests, dev, embedding). They
//! implement the same traits a SQL backend would, with the same failure
//! vocabulary ([`stockorder_core::StoreError`]).

pub mod store;

pub use store::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductCatalog, InMemoryTable};
