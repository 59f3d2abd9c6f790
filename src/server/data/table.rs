use sea_orm::{
    sea_query::Expr, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::table::RestaurantTable;

pub struct TableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all tables ordered by table number, optionally restricted to table numbers
    /// whose decimal text contains `number_filter`.
    pub async fn get_all(
        &self,
        number_filter: Option<&str>,
    ) -> Result<Vec<RestaurantTable>, DbErr> {
        let mut query = entity::prelude::RestaurantTable::find();

        if let Some(number) = number_filter.filter(|number| !number.is_empty()) {
            query = query.filter(Expr::cust_with_values(
                "instr(CAST(\"tables\".\"table_number\" AS TEXT), ?) > 0",
                [number],
            ));
        }

        let tables = query
            .order_by_asc(entity::restaurant_table::Column::TableNumber)
            .all(self.db)
            .await?;

        Ok(tables
            .into_iter()
            .map(RestaurantTable::from_entity)
            .collect())
    }

    /// Checks whether a table with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::RestaurantTable::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
