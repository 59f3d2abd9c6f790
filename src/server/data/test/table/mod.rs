use crate::server::data::table::TableRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::restaurant_table::TableFactory};

mod exists;
mod get_all;
