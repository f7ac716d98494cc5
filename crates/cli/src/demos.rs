//! The five demo sequences, one module per domain crate.

pub mod accounts;
pub mod grading;
pub mod inventory;
pub mod orders;
pub mod stocklog;
