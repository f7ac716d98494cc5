//! Stock log module: an append-only in-memory list of stock entries with
//! whole-list save/load against a JSON file.

pub mod item;
pub mod log;

pub use item::StockItem;
pub use log::{LoadOutcome, LogError, StockLog};
