//! Inventory module.
//!
//! Typed inventory items, a stock repository that enforces the non-negative
//! quantity rule, and the store manager that drives both item categories.

pub mod item;
pub mod store;

pub use item::{FoodProduct, InventoryItem, TechProduct};
pub use store::{increase_stock, remove_item, StockRepository, StoreManager};
