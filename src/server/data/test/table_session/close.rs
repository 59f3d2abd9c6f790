use super::*;

/// Tests closing an open session.
///
/// Expected: Ok with `closed_at` set
#[tokio::test]
async fn closes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_table, session) = factory::helpers::create_open_session(db).await?;
    let repo = TableSessionRepository::new(db);

    let closed = repo.close(session.id).await?;

    assert_eq!(closed.id, session.id);
    assert_eq!(closed.opened_at, session.opened_at);
    assert!(!closed.is_open());

    let stored = repo.find_by_id(session.id).await?.unwrap();
    assert!(stored.closed_at.is_some());

    Ok(())
}

/// Tests closing a session that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_nonexistent_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TableSessionRepository::new(db).close(404).await;

    assert!(result.is_err());

    Ok(())
}
