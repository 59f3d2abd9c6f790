use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_tables_table::Tables;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TablesSessions::Table)
                    .if_not_exists()
                    .col(pk_auto(TablesSessions::Id))
                    .col(integer(TablesSessions::TableId))
                    .col(
                        timestamp_with_time_zone(TablesSessions::OpenedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(TablesSessions::ClosedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tables_sessions_table_id")
                            .from(TablesSessions::Table, TablesSessions::TableId)
                            .to(Tables::Table, Tables::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TablesSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TablesSessions {
    Table,
    Id,
    TableId,
    OpenedAt,
    ClosedAt,
}
