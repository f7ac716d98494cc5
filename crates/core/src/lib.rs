//! `tally-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting
//! concerns): the entity identity model, the closed domain error enum, and
//! the generic keyed repository the other modules build on.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use repository::Repository;
