use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub table_number: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::table_session::Entity")]
    TableSession,
}

impl Related<super::table_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
