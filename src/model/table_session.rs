use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableSessionDto {
    pub id: i32,
    pub table_id: i32,
    pub opened_at: DateTime<Utc>,
    /// `null` while the table is still open.
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OpenTableSessionDto {
    pub table_id: i32,
}
