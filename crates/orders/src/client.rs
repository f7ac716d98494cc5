use serde::{Deserialize, Serialize};

use tally_core::{Entity, EntityId};

/// A registered client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    pub full_name: String,
    pub age: u8,
    pub gender: String,
}

impl Client {
    pub fn new(id: u32, full_name: impl Into<String>, age: u8, gender: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(id),
            full_name: full_name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl Entity for Client {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl core::fmt::Display for Client {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Client [Id={}, Name={}, Age={}, Gender={}]",
            self.id, self.full_name, self.age, self.gender
        )
    }
}
