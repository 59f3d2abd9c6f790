use super::*;

#[tokio::test]
async fn reports_existing_and_missing_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = TableFactory::new(db).build().await?;
    let repo = TableRepository::new(db);

    assert!(repo.exists(table.id).await?);
    assert!(!repo.exists(table.id + 1).await?);

    Ok(())
}
