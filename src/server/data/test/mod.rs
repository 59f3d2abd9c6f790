mod table;
mod table_session;
