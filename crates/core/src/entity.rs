//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is the same object across state changes as long as its id is
/// unchanged (a user profile stays "that profile" through activation).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
