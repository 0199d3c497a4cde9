//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Customers, catalog products and orders are all entities: two values with
/// the same identifier are the same thing, even when their attributes differ
/// (e.g. a catalog product before and after a stock update).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (ignores attributes).
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
