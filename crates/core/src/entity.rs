//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity is a field the entity embeds (see [`crate::EntityId`]), not a base type
/// it inherits from.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
