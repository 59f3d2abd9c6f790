use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::product::{CreateProductParams, Product, UpdateProductParams};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all products ordered by name, optionally restricted to names containing
    /// `name_filter`.
    ///
    /// The match is a case-sensitive substring search; `instr` is used instead of
    /// `LIKE`, which SQLite compares case-insensitively. An empty filter matches all.
    pub async fn get_all(&self, name_filter: Option<&str>) -> Result<Vec<Product>, DbErr> {
        let mut query = entity::prelude::Product::find();

        if let Some(name) = name_filter.filter(|name| !name.is_empty()) {
            query = query.filter(Expr::cust_with_values(
                "instr(\"products\".\"name\", ?) > 0",
                [name],
            ));
        }

        let products = query
            .order_by_asc(entity::product::Column::Name)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    /// Gets a product by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let product = entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(product.map(Product::from_entity))
    }

    /// Inserts a new product stamped with the current time
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let now = Utc::now();

        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    /// Updates a product's name and price and refreshes `updated_at`
    ///
    /// Fails with `DbErr::RecordNotUpdated` if the product does not exist.
    pub async fn update(&self, params: UpdateProductParams) -> Result<Product, DbErr> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    /// Deletes a product by ID
    ///
    /// # Returns
    /// - `Ok(true)` - Product deleted
    /// - `Ok(false)` - No product with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
