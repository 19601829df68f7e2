use super::schema::ensure_schema;
use crate::libs::config::Config;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// The single store handle shared by every repository.
///
/// Opening a `Db` turns on foreign key enforcement and makes sure the schema
/// exists. Statements run in autocommit mode, so each insert is its own
/// transaction.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the configured location.
    pub fn new() -> Result<Db> {
        let db_path = Config::read()?.db_path()?;
        Self::open(db_path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("failed to create database directory")?;
            }
        }

        let conn = Connection::open(path).with_context(|| format!("failed to open SQLite database {}", path.display()))?;
        tracing::debug!("opened database {}", path.display());
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory().context("failed to open in-memory SQLite database")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Db> {
        conn.execute_batch("PRAGMA foreign_keys = ON;").context("failed to enable foreign keys")?;
        ensure_schema(&conn)?;
        Ok(Db { conn })
    }
}
