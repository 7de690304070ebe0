use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "wraptime.db";

/// Handle on the application database.
///
/// Opening the handle resolves the database path inside the application
/// data directory and brings the schema up to date through the migration
/// system.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
