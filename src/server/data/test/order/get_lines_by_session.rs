use super::*;

/// Tests listing the orders of a session.
///
/// Expected: lines joined with the product name, with `total = price * quantity`
#[tokio::test]
async fn returns_lines_with_product_name_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = ProductFactory::new(db)
        .name("Pizza")
        .price(88.99)
        .build()
        .await?;
    let (_table, session) = factory::helpers::create_open_session(db).await?;
    OrderFactory::new(db, session.id, pizza.id)
        .quantity(2)
        .price(pizza.price)
        .build()
        .await?;

    let lines = OrderRepository::new(db)
        .get_lines_by_session(session.id)
        .await?;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].name, "Pizza");
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].price, 88.99);
    assert_eq!(lines[0].total, 177.98);

    Ok(())
}

/// Tests line ordering.
///
/// Expected: newest order first
#[tokio::test]
async fn orders_lines_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let (_table, session) = factory::helpers::create_open_session(db).await?;
    let now = Utc::now();

    let older = OrderFactory::new(db, session.id, product.id)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    let newer = OrderFactory::new(db, session.id, product.id)
        .created_at(now)
        .build()
        .await?;

    let lines = OrderRepository::new(db)
        .get_lines_by_session(session.id)
        .await?;
    let ids: Vec<_> = lines.iter().map(|l| l.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests that orders of other sessions are excluded.
///
/// Expected: only the requested session's lines
#[tokio::test]
async fn excludes_other_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _table, session, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let (_other_table, other_session) = factory::helpers::create_open_session(db).await?;
    factory::create_order(db, other_session.id, product.id).await?;

    let lines = OrderRepository::new(db)
        .get_lines_by_session(session.id)
        .await?;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, order.id);

    Ok(())
}

/// Tests that the captured price is used rather than the current catalog price.
///
/// Expected: line price equals the order's stored price
#[tokio::test]
async fn uses_captured_price_not_catalog_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = ProductFactory::new(db).price(50.0).build().await?;
    let (_table, session) = factory::helpers::create_open_session(db).await?;
    OrderFactory::new(db, session.id, product.id)
        .quantity(3)
        .price(12.5)
        .build()
        .await?;

    let lines = OrderRepository::new(db)
        .get_lines_by_session(session.id)
        .await?;

    assert_eq!(lines[0].price, 12.5);
    assert_eq!(lines[0].total, 37.5);

    Ok(())
}
