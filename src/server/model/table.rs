//! Physical table domain model.

use chrono::{DateTime, Utc};

use crate::model::table::TableDto;

/// A physical table in the restaurant. Read-only through the API.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantTable {
    pub id: i32,
    pub table_number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RestaurantTable {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant_table::Model) -> Self {
        Self {
            id: entity.id,
            table_number: entity.table_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TableDto {
        TableDto {
            id: self.id,
            table_number: self.table_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
