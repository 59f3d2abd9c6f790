use super::*;

/// Tests creating a product.
///
/// Verifies that the repository inserts the product with matching created and
/// updated timestamps.
///
/// Expected: Ok with the stored product
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            name: "Pizza".to_string(),
            price: 88.99,
        })
        .await?;

    assert_eq!(product.name, "Pizza");
    assert_eq!(product.price, 88.99);
    assert_eq!(product.created_at, product.updated_at);

    let db_product = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_product.name, "Pizza");

    Ok(())
}
