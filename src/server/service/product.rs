use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParams, Product, UpdateProductParams},
};

pub const PRODUCT_NOT_FOUND: &str = "Product not found!";

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists catalog products ordered by name, optionally filtered by a name substring
    pub async fn list(&self, name_filter: Option<&str>) -> Result<Vec<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_all(name_filter).await?)
    }

    /// Adds a product to the catalog
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let product = repo.create(params).await?;

        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product)
    }

    /// Replaces a product's name and price
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(AppError::NotFound)` - No product with that ID, nothing is written
    pub async fn update(&self, params: UpdateProductParams) -> Result<Product, AppError> {
        let txn = self.db.begin().await?;
        let repo = ProductRepository::new(&txn);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        }

        let product = repo.update(params).await?;

        txn.commit().await?;

        Ok(product)
    }

    /// Removes a product from the catalog
    ///
    /// Products referenced by existing orders cannot be removed; the foreign key
    /// rejection surfaces as a database error.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ProductRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        }

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted product {}", id);

        Ok(())
    }
}
