use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tally_core::{Entity, EntityId};

/// Common surface of anything the stock repository can hold.
///
/// Quantity is the one mutable field; it only changes through
/// [`crate::StockRepository::update_quantity`], which enforces the
/// non-negative rule.
pub trait InventoryItem: Entity {
    fn name(&self) -> &str;
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

/// An electronics item with brand and warranty metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechProduct {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    pub warranty_months: u32,
}

impl TechProduct {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

impl Entity for TechProduct {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl InventoryItem for TechProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for TechProduct {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Electronic: {} (ID: {}, Brand: {}, Warranty: {} months, Qty: {})",
            self.name, self.id, self.brand, self.warranty_months, self.quantity
        )
    }
}

/// A perishable grocery item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodProduct {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub expires_on: NaiveDate,
}

impl FoodProduct {
    pub fn new(id: u32, name: impl Into<String>, quantity: i64, expires_on: NaiveDate) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            quantity,
            expires_on,
        }
    }
}

impl Entity for FoodProduct {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl InventoryItem for FoodProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for FoodProduct {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Grocery: {} (ID: {}, Expires: {}, Qty: {})",
            self.name,
            self.id,
            self.expires_on.format("%Y-%m-%d"),
            self.quantity
        )
    }
}
