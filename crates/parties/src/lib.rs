//! Parties domain module (customers).
//!
//! Order creation only needs to know whether a customer exists, so this crate
//! carries the customer entity and the lookup port. No IO, no storage.

pub mod customer;

pub use customer::{Customer, CustomerId, CustomerLookup};
