use super::*;

/// Tests opening a session on a table.
///
/// Expected: Ok with `opened_at` set and `closed_at` empty
#[tokio::test]
async fn opens_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    let before = Utc::now();

    let session = TableSessionRepository::new(db).open(table.id).await?;

    assert_eq!(session.table_id, table.id);
    assert!(session.opened_at >= before);
    assert!(session.closed_at.is_none());
    assert!(session.is_open());

    Ok(())
}

/// Tests that the unique index rejects a second open session on one table.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_second_open_session_for_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    let repo = TableSessionRepository::new(db);

    repo.open(table.id).await?;
    let result = repo.open(table.id).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a closed session does not block opening a new one.
///
/// Expected: Ok
#[tokio::test]
async fn opens_after_previous_session_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (table, _closed) = factory::helpers::create_closed_session(db).await?;

    let session = TableSessionRepository::new(db).open(table.id).await?;

    assert!(session.is_open());

    Ok(())
}
