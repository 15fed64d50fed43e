//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — identity does
/// not matter, only the attribute values do. Two `MessageTemplate`s with the
/// same subject and body are the same template; a request with the same id is
/// the same request even after its status changes (that one is an entity).
///
/// To "modify" a value object, create a new one with the new values. This
/// keeps them safe to share across threads and predictable to compare.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared and logged like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
