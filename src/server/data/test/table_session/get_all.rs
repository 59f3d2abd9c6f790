use super::*;

/// Tests session ordering.
///
/// Expected: open sessions first, then closed sessions by closing time ascending
#[tokio::test]
async fn lists_open_sessions_first_then_by_closed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let table_a = factory::create_table(db).await?;
    let table_b = factory::create_table(db).await?;

    let closed_late = TableSessionFactory::new(db, table_a.id)
        .opened_at(now - Duration::hours(2))
        .closed_at(Some(now - Duration::minutes(30)))
        .build()
        .await?;
    let closed_early = TableSessionFactory::new(db, table_b.id)
        .opened_at(now - Duration::hours(3))
        .closed_at(Some(now - Duration::hours(2)))
        .build()
        .await?;
    let open = factory::create_session(db, table_a.id).await?;

    let sessions = TableSessionRepository::new(db).get_all().await?;
    let ids: Vec<_> = sessions.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![open.id, closed_early.id, closed_late.id]);

    Ok(())
}

#[tokio::test]
async fn returns_empty_list_without_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sessions = TableSessionRepository::new(db).get_all().await?;

    assert!(sessions.is_empty());

    Ok(())
}
