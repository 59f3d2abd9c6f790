use super::*;

/// Tests the summary of a session without orders.
///
/// Expected: zero total and zero quantity rather than nulls
#[tokio::test]
async fn returns_zero_for_session_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_table, session) = factory::helpers::create_open_session(db).await?;

    let summary = OrderRepository::new(db).get_summary(session.id).await?;

    assert_eq!(summary.total, 0.0);
    assert_eq!(summary.quantity, 0);

    Ok(())
}

/// Tests aggregation over several orders.
///
/// Expected: sums of line totals and quantities
#[tokio::test]
async fn sums_totals_and_quantities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = ProductFactory::new(db).price(10.0).build().await?;
    let second = ProductFactory::new(db).price(2.5).build().await?;
    let (_table, session) = factory::helpers::create_open_session(db).await?;

    OrderFactory::new(db, session.id, first.id)
        .quantity(2)
        .price(first.price)
        .build()
        .await?;
    OrderFactory::new(db, session.id, second.id)
        .quantity(4)
        .price(second.price)
        .build()
        .await?;

    let summary = OrderRepository::new(db).get_summary(session.id).await?;

    assert_eq!(summary.total, 30.0);
    assert_eq!(summary.quantity, 6);

    Ok(())
}

/// Tests the single-order example from the catalog seed.
///
/// Expected: Pizza 88.99 x 2 sums to 177.98
#[tokio::test]
async fn summarizes_single_order() -> Result<(), DbErr> {
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

    let summary = OrderRepository::new(db).get_summary(session.id).await?;

    assert_eq!(summary.total, 177.98);
    assert_eq!(summary.quantity, 2);

    Ok(())
}
