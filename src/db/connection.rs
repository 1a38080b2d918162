use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

use crate::errors::ServerError;

const SQL_SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Handle to the listings store. Holds only the file location; every
/// read opens and closes its own connection.
#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a read-only connection, runs `f`, then closes the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Connection) -> Result<T, ServerError>,
    {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;

        let result = f(&conn);

        if let Err((_, e)) = conn.close() {
            log::warn!("Closing {} failed: {e}", self.path.display());
        }

        result
    }
}

/// Creates the store with the `room_ver2` schema when the file does not
/// exist yet. An existing file is left untouched.
///
/// Returns `true` when a new store was created.
pub fn initialize_store(db: &Database) -> Result<bool, ServerError> {
    if db.path().exists() {
        return Ok(false);
    }

    let conn = Connection::open(db.path())
        .map_err(|e| ServerError::DbError(format!("Create DB failed: {e}")))?;

    conn.execute_batch(SQL_SCHEMA)
        .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))?;

    log::info!("Created listings store at {}", db.path().display());
    Ok(true)
}
