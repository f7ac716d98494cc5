//! Entity trait: identity + continuity across state changes.

use crate::id::EntityId;

/// Entity marker + minimal interface.
///
/// The id is fixed at construction; mutable fields only change through the
/// repository's validated operations.
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> EntityId;
}
