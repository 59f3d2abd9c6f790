use crate::server::data::table_session::TableSessionRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, table_session::TableSessionFactory},
};

mod close;
mod find_latest_for_table;
mod get_all;
mod open;
