use super::*;

/// Tests that the most recently opened session is returned.
///
/// Expected: the newer session, regardless of insertion order
#[tokio::test]
async fn returns_most_recently_opened_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    let now = Utc::now();

    let newer = TableSessionFactory::new(db, table.id)
        .opened_at(now - Duration::minutes(10))
        .build()
        .await?;
    TableSessionFactory::new(db, table.id)
        .opened_at(now - Duration::hours(3))
        .closed_at(Some(now - Duration::hours(2)))
        .build()
        .await?;

    let latest = TableSessionRepository::new(db)
        .find_latest_for_table(table.id)
        .await?
        .unwrap();

    assert_eq!(latest.id, newer.id);
    assert!(latest.is_open());

    Ok(())
}

/// Tests that sessions of other tables are ignored.
///
/// Expected: None for a table that never had a session
#[tokio::test]
async fn returns_none_for_table_without_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_open_session(db).await?;
    let idle = factory::create_table(db).await?;

    let latest = TableSessionRepository::new(db)
        .find_latest_for_table(idle.id)
        .await?;

    assert!(latest.is_none());

    Ok(())
}
