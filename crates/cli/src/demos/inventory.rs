use tally_core::EntityId;
use tally_inventory::{increase_stock, remove_item, StoreManager, TechProduct};

/// Seed both categories, list them, then run the deliberate failure cases:
/// duplicate add, missing removal, negative quantity update.
pub fn run() {
    println!("=== Inventory ===");

    let mut manager = StoreManager::new();
    if let Err(err) = manager.seed() {
        tracing::warn!(error = %err, "inventory seed failed");
    }

    println!("--- Grocery Items ---");
    for item in manager.groceries().all() {
        println!("{item}");
    }
    println!("--- Electronic Items ---");
    for item in manager.electronics().all() {
        println!("{item}");
    }

    // Expected failures; each is reported and survived.
    if let Err(err) = manager
        .electronics_mut()
        .add(TechProduct::new(10, "Monitor", 5, "LG", 18))
    {
        println!("[Duplicate Error] {err}");
    }

    remove_item(manager.groceries_mut(), EntityId::new(999));

    if let Err(err) = manager.groceries_mut().update_quantity(EntityId::new(201), -5) {
        println!("[Invalid Quantity] {err}");
    }

    increase_stock(manager.groceries_mut(), EntityId::new(202), 10);

    println!("--- Final Grocery Inventory ---");
    for item in manager.groceries().all() {
        println!("{item}");
    }
    println!();
}
