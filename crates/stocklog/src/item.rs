use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, EntityId};

/// One logged stock entry.
///
/// Serialized with PascalCase field names; that is the shape existing data
/// files carry, so it is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl StockItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i64, date_added: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl Entity for StockItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_pascal_case_field_names() {
        let item = StockItem::new(101, "Desk Lamp", 8, Utc::now());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["Id"], 101);
        assert_eq!(json["Name"], "Desk Lamp");
        assert_eq!(json["Quantity"], 8);
        assert!(json.get("DateAdded").is_some());
    }
}
