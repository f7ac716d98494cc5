use chrono::{Duration, Utc};

use tally_core::{DomainError, DomainResult, EntityId, Repository};

use crate::item::{FoodProduct, InventoryItem, TechProduct};

/// Keyed store for one category of inventory items.
///
/// Thin layer over [`Repository`] that adds the quantity rule: quantities
/// are never negative.
#[derive(Debug)]
pub struct StockRepository<T: InventoryItem> {
    items: Repository<T>,
}

impl<T: InventoryItem> Default for StockRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InventoryItem> StockRepository<T> {
    pub fn new() -> Self {
        Self {
            items: Repository::new(),
        }
    }

    pub fn add(&mut self, item: T) -> DomainResult<()> {
        self.items.add(item)
    }

    pub fn get(&self, id: EntityId) -> DomainResult<&T> {
        self.items.get(id)
    }

    pub fn remove(&mut self, id: EntityId) -> DomainResult<T> {
        self.items.remove(id)
    }

    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.all()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Overwrite the stored quantity.
    ///
    /// The value is validated before the lookup, so an invalid value never
    /// touches the store.
    pub fn update_quantity(&mut self, id: EntityId, new_quantity: i64) -> DomainResult<()> {
        if new_quantity < 0 {
            return Err(DomainError::invalid_value(format!(
                "quantity cannot be negative (got {new_quantity})"
            )));
        }
        self.items.update(id, |item| {
            item.set_quantity(new_quantity);
            Ok(())
        })
    }
}

/// Drives the two item categories and absorbs expected demo failures.
#[derive(Debug, Default)]
pub struct StoreManager {
    electronics: StockRepository<TechProduct>,
    groceries: StockRepository<FoodProduct>,
}

impl StoreManager {
    pub fn new() -> Self {
        Self {
            electronics: StockRepository::new(),
            groceries: StockRepository::new(),
        }
    }

    /// Load the fixed sample items.
    pub fn seed(&mut self) -> DomainResult<()> {
        self.electronics
            .add(TechProduct::new(10, "Tablet", 12, "Apple", 18))?;
        self.electronics
            .add(TechProduct::new(11, "Smartwatch", 8, "Garmin", 24))?;

        let today = Utc::now().date_naive();
        self.groceries
            .add(FoodProduct::new(201, "Yoghurt", 25, today + Duration::days(10)))?;
        self.groceries
            .add(FoodProduct::new(202, "Eggs", 50, today + Duration::days(14)))?;
        Ok(())
    }

    pub fn electronics(&self) -> &StockRepository<TechProduct> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut StockRepository<TechProduct> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &StockRepository<FoodProduct> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut StockRepository<FoodProduct> {
        &mut self.groceries
    }
}

/// Add `delta` units to an item's stock; failures are logged and swallowed.
pub fn increase_stock<T: InventoryItem>(repo: &mut StockRepository<T>, id: EntityId, delta: i64) {
    let new_quantity = match repo.get(id) {
        Ok(item) => item.quantity() + delta,
        Err(err) => {
            tracing::warn!(id = %id, error = %err, "stock update failed");
            return;
        }
    };

    match repo.update_quantity(id, new_quantity) {
        Ok(()) => tracing::info!(id = %id, quantity = new_quantity, "stock updated"),
        Err(err) => tracing::warn!(id = %id, error = %err, "stock update failed"),
    }
}

/// Remove an item by id; failures are logged and swallowed.
pub fn remove_item<T: InventoryItem>(repo: &mut StockRepository<T>, id: EntityId) {
    match repo.remove(id) {
        Ok(item) => tracing::info!(id = %id, name = item.name(), "item removed"),
        Err(err) => tracing::warn!(id = %id, error = %err, "item removal failed"),
    }
}
