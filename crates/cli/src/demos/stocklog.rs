use chrono::Utc;

use tally_stocklog::{LoadOutcome, StockItem, StockLog};

/// Seed the log, save it, reload into a fresh instance, and list the
/// entries.
pub fn run() -> anyhow::Result<()> {
    println!("=== Stock Log ===");

    let path = std::env::temp_dir().join("tally_stock.json");

    let mut log = StockLog::new(&path);
    let now = Utc::now();
    log.add(StockItem::new(101, "Desk Lamp", 8, now));
    log.add(StockItem::new(102, "Office Chair", 12, now));
    log.add(StockItem::new(103, "Filing Cabinet", 5, now));
    log.add(StockItem::new(104, "Whiteboard", 4, now));
    log.add(StockItem::new(105, "Projector", 2, now));
    log.save()?;

    let mut reloaded: StockLog<StockItem> = StockLog::new(&path);
    match reloaded.load()? {
        LoadOutcome::Loaded(count) => println!("Loaded {count} entries from {}", path.display()),
        LoadOutcome::NoFile => println!("No data file found."),
    }

    for item in reloaded.entries() {
        println!(
            "{}: {} - Qty: {} (Added: {})",
            item.id,
            item.name,
            item.quantity,
            item.date_added.format("%Y-%m-%d")
        );
    }
    println!();
    Ok(())
}
