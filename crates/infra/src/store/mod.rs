//! In-memory implementations of the customer, catalog and order ports.

pub mod catalog;
pub mod customers;
pub mod orders;
pub mod table;

pub use catalog::InMemoryProductCatalog;
pub use customers::InMemoryCustomerStore;
pub use orders::InMemoryOrderStore;
pub use table::InMemoryTable;
