//! `stockorder-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).
//! The one exception is [`StoreError`], the error vocabulary shared by every
//! repository trait declared in the domain crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod store;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use store::{StoreError, StoreResult};
pub use value_object::ValueObject;
