use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, EntityId};

/// An order placed by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    pub client_id: EntityId,
    pub item: String,
    pub issued_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: u32,
        client_id: u32,
        item: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            client_id: EntityId::new(client_id),
            item: item.into(),
            issued_at,
        }
    }
}

impl Entity for Order {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order [Id={}, ClientId={}, Item={}, Issued={}]",
            self.id,
            self.client_id,
            self.item,
            self.issued_at.format("%Y-%m-%d")
        )
    }
}
