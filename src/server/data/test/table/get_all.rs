use super::*;

/// Tests listing tables without a filter.
///
/// Expected: every table ordered by table number
#[tokio::test]
async fn returns_tables_ordered_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for number in [3, 1, 2] {
        TableFactory::new(db).table_number(number).build().await?;
    }

    let tables = TableRepository::new(db).get_all(None).await?;
    let numbers: Vec<_> = tables.iter().map(|t| t.table_number).collect();

    assert_eq!(numbers, vec![1, 2, 3]);

    Ok(())
}

/// Tests filtering tables by a substring of the table number.
///
/// Expected: tables whose number, written out, contains the filter
#[tokio::test]
async fn filters_by_table_number_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for number in [1, 2, 10, 11, 21] {
        TableFactory::new(db).table_number(number).build().await?;
    }

    let tables = TableRepository::new(db).get_all(Some("1")).await?;
    let numbers: Vec<_> = tables.iter().map(|t| t.table_number).collect();

    assert_eq!(numbers, vec![1, 10, 11, 21]);

    Ok(())
}

/// Tests a filter that matches nothing.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TableFactory::new(db).table_number(4).build().await?;

    let tables = TableRepository::new(db).get_all(Some("9")).await?;

    assert!(tables.is_empty());

    Ok(())
}
