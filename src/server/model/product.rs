//! Product catalog domain model and validated operation parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::error::validation::ValidationError,
};

/// Minimum product name length, counted in characters after trimming.
pub const MIN_PRODUCT_NAME_LENGTH: usize = 3;

/// A sellable catalog entry with its current price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    /// Trimmed product name.
    pub name: String,
    pub price: f64,
}

impl CreateProductParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateProductParams)` - Name trimmed and at least 3 characters, price > 0
    /// - `Err(ValidationError)` - The first rule the input breaks
    pub fn try_from_dto(dto: CreateProductDto) -> Result<Self, ValidationError> {
        let (name, price) = validate_product(&dto.name, dto.price)?;

        Ok(Self { name, price })
    }
}

/// Validated input for updating an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductParams {
    pub id: i32,
    /// Trimmed product name.
    pub name: String,
    pub price: f64,
}

impl UpdateProductParams {
    /// Validates an update request with the same rules as creation.
    pub fn try_from_dto(id: i32, dto: UpdateProductDto) -> Result<Self, ValidationError> {
        let (name, price) = validate_product(&dto.name, dto.price)?;

        Ok(Self { id, name, price })
    }
}

fn validate_product(name: &str, price: f64) -> Result<(String, f64), ValidationError> {
    let name = name.trim();

    if name.chars().count() < MIN_PRODUCT_NAME_LENGTH {
        return Err(ValidationError::NameTooShort {
            min: MIN_PRODUCT_NAME_LENGTH,
        });
    }

    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::PriceNotPositive);
    }

    Ok((name.to_string(), price))
}
