use crate::db::migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "tudo.db";

/// Core database connection.
///
/// Opening runs all pending migrations, so every DAO starts from a
/// current schema.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let file_name = Config::read().map(|c| c.db_file).unwrap_or_else(|_| DB_FILE_NAME.to_string());
        let db_file_path = DataStorage::new().get_path(&file_name)?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
