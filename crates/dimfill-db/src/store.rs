//! Store connection management.
//!
//! This module opens the catalog database, checks that the `images` table
//! has the columns dimfill needs, and exposes the narrow
//! [`DimensionStore`] interface the backfill procedure runs against.

use std::path::Path;

use dimfill_common::{Error, Result};
use rusqlite::{Connection, OpenFlags};

use crate::models::{Candidate, DimensionUpdate};
use crate::queries::images;

/// Columns of the `images` table that must exist.
pub const REQUIRED_COLUMNS: &[&str] = &["id", "image_path", "image_width", "image_height"];

/// Storage capability used by the backfill procedure.
pub trait DimensionStore {
    /// Snapshot of all rows whose width or height is missing or zero.
    fn find_missing_dimensions(&self) -> Result<Vec<Candidate>>;

    /// Apply all updates as a single atomic transaction.
    ///
    /// Returns the number of rows changed. On error none of the updates are
    /// persisted. An empty slice is a no-op and does not begin a transaction.
    fn commit_dimensions(&mut self, updates: &[DimensionUpdate]) -> Result<usize>;
}

/// SQLite-backed [`DimensionStore`].
///
/// The connection is closed when the store is dropped; use
/// [`SqliteStore::close`] to observe close errors.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open an existing database file.
    ///
    /// The file is opened read-write without create, so a wrong path fails
    /// here instead of producing an empty database. The schema is checked
    /// before returning.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Open store with a verified schema
    /// * `Err(Error)` - If the file cannot be opened or the schema is wrong
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            Error::database(format!("Failed to open database {}: {}", path.display(), e))
        })?;

        Self::from_connection(conn)
    }

    /// Wrap an already open connection, checking the schema first.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        verify_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error from SQLite.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| Error::database(format!("Failed to close database: {}", e)))
    }
}

impl DimensionStore for SqliteStore {
    fn find_missing_dimensions(&self) -> Result<Vec<Candidate>> {
        images::find_missing_dimensions(&self.conn)
    }

    fn commit_dimensions(&mut self, updates: &[DimensionUpdate]) -> Result<usize> {
        if updates.is_empty() {
            return Ok(0);
        }

        // Dropping the transaction on an early return rolls it back.
        let tx = self
            .conn
            .transaction()
            .map_err(|e| Error::database(format!("Failed to begin transaction: {}", e)))?;

        let mut changed = 0;
        for update in updates {
            changed += images::update_dimensions(&tx, update)?;
        }

        tx.commit()
            .map_err(|e| Error::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(changed)
    }
}

/// Check that the `images` table exists with every column in [`REQUIRED_COLUMNS`].
pub fn verify_schema(conn: &Connection) -> Result<()> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('images')")
        .map_err(|e| Error::database(e.to_string()))?;

    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    if columns.is_empty() {
        return Err(Error::schema("table 'images' does not exist"));
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|c| c.eq_ignore_ascii_case(required)))
        .collect();

    if !missing.is_empty() {
        return Err(Error::schema(format!(
            "table 'images' is missing column(s): {}",
            missing.join(", ")
        )));
    }

    Ok(())
}
