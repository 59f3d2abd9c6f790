use super::*;

/// Tests deleting a product by ID.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;

    let deleted = ProductRepository::new(db).delete(product.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a product that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ProductRepository::new(db).delete(12345).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests deleting one product leaves the others untouched.
///
/// Expected: only the target row removed
#[tokio::test]
async fn deletes_product_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;

    ProductRepository::new(db).delete(first.id).await?;

    let remaining = entity::prelude::Product::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    Ok(())
}
