use super::*;

/// Tests updating a product's name and price.
///
/// Expected: Ok with new values and a refreshed `updated_at`
#[tokio::test]
async fn updates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_product(db).await?;

    let updated = ProductRepository::new(db)
        .update(UpdateProductParams {
            id: created.id,
            name: "Hamburguer".to_string(),
            price: 26.99,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Hamburguer");
    assert_eq!(updated.price, 26.99);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Err, nothing inserted
#[tokio::test]
async fn fails_for_nonexistent_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .update(UpdateProductParams {
            id: 999,
            name: "Ghost".to_string(),
            price: 1.0,
        })
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Product::find().all(db).await?.is_empty());

    Ok(())
}
