use super::*;

/// Tests inserting an order with a captured price.
///
/// Expected: Ok with the given unit price stored on the order
#[tokio::test]
async fn creates_order_with_unit_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = ProductFactory::new(db).price(88.99).build().await?;
    let (_table, session) = factory::helpers::create_open_session(db).await?;

    let order = OrderRepository::new(db)
        .create(
            CreateOrderParams {
                table_session_id: session.id,
                product_id: product.id,
                quantity: 2,
            },
            product.price,
        )
        .await?;

    assert_eq!(order.table_session_id, session.id);
    assert_eq!(order.product_id, product.id);
    assert_eq!(order.quantity, 2);
    assert_eq!(order.price, 88.99);

    Ok(())
}
