use super::*;

/// Tests listing products without a filter.
///
/// Expected: every product, ordered by name ascending
#[tokio::test]
async fn returns_all_products_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Tilapia", "Batata frita", "Pizza"] {
        factory::product::ProductFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let products = ProductRepository::new(db).get_all(None).await?;
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Batata frita", "Pizza", "Tilapia"]);

    Ok(())
}

/// Tests that an empty filter behaves like no filter.
///
/// Expected: every product
#[tokio::test]
async fn empty_filter_returns_all_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_product(db).await?;
    factory::create_product(db).await?;

    let products = ProductRepository::new(db).get_all(Some("")).await?;

    assert_eq!(products.len(), 2);

    Ok(())
}

/// Tests filtering products by a name substring.
///
/// Expected: only products whose name contains the filter
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Batata frita", "Batata doce assada", "Pizza"] {
        factory::product::ProductFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let products = ProductRepository::new(db).get_all(Some("tata")).await?;
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Batata doce assada", "Batata frita"]);

    Ok(())
}

/// Tests that the name filter is case-sensitive.
///
/// Expected: no match for a differently cased filter
#[tokio::test]
async fn name_filter_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .name("Pizza")
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(repo.get_all(Some("pizza")).await?.is_empty());
    assert_eq!(repo.get_all(Some("Piz")).await?.len(), 1);

    Ok(())
}
