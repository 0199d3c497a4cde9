//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. An order line is
/// the canonical example here: `{ product, unit price, quantity }` captured at
/// order time, with no identity of its own.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct StockUpdate {
///     product_id: ProductId,
///     new_quantity: u64,
/// }
///
/// impl ValueObject for StockUpdate {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
