use sea_orm::DatabaseConnection;

use crate::server::{data::table::TableRepository, error::AppError, model::table::RestaurantTable};

pub struct TableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists physical tables ordered by number, optionally filtered by a number substring
    pub async fn list(
        &self,
        number_filter: Option<&str>,
    ) -> Result<Vec<RestaurantTable>, AppError> {
        let repo = TableRepository::new(self.db);

        Ok(repo.get_all(number_filter).await?)
    }
}
