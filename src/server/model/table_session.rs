//! Table session domain model.
//!
//! A session spans from the moment a table is opened until it is closed. A table has at
//! most one open session at a time; `closed_at` is written exactly once.

use chrono::{DateTime, Utc};

use crate::model::table_session::TableSessionDto;

#[derive(Debug, Clone, PartialEq)]
pub struct TableSession {
    pub id: i32,
    pub table_id: i32,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl TableSession {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::table_session::Model) -> Self {
        Self {
            id: entity.id,
            table_id: entity.table_id,
            opened_at: entity.opened_at,
            closed_at: entity.closed_at,
        }
    }

    /// Whether the session still accepts orders.
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }

    pub fn into_dto(self) -> TableSessionDto {
        TableSessionDto {
            id: self.id,
            table_id: self.table_id,
            opened_at: self.opened_at,
            closed_at: self.closed_at,
        }
    }
}
