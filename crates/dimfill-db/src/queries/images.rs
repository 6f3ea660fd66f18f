//! Image database queries.
//!
//! This module provides the selection of rows whose dimensions are missing
//! or zero, the per-row dimension update, and single-row lookup.

use dimfill_common::{Error, ImageId, Result};
use rusqlite::Connection;

use crate::models::{Candidate, DimensionUpdate, ImageRecord};

/// Parse an image from a database row.
///
/// Expects columns in order: id, image_path, image_width, image_height.
fn parse_image_row(row: &rusqlite::Row) -> rusqlite::Result<ImageRecord> {
    Ok(ImageRecord {
        id: ImageId::from(row.get::<_, i64>(0)?),
        image_path: row.get(1)?,
        image_width: row.get(2)?,
        image_height: row.get(3)?,
    })
}

/// Find every image whose width or height is NULL or zero.
///
/// A NULL `image_path` is returned as an empty string, which never resolves
/// to an existing file.
///
/// # Arguments
///
/// * `conn` - Database connection
///
/// # Returns
///
/// * `Ok(Vec<Candidate>)` - Rows needing dimensions, ordered by ID
/// * `Err(Error)` - If a database error occurs
pub fn find_missing_dimensions(conn: &Connection) -> Result<Vec<Candidate>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, COALESCE(image_path, '') FROM images
             WHERE image_width IS NULL OR image_width = 0
                OR image_height IS NULL OR image_height = 0
             ORDER BY id",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let candidates = stmt
        .query_map([], |row| {
            Ok(Candidate {
                id: ImageId::from(row.get::<_, i64>(0)?),
                image_path: row.get(1)?,
            })
        })
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(candidates)
}

/// Count the images whose width or height is NULL or zero.
pub fn count_missing_dimensions(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM images
             WHERE image_width IS NULL OR image_width = 0
                OR image_height IS NULL OR image_height = 0",
            [],
            |row| row.get(0),
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(count as usize)
}

/// Write measured dimensions to one image row.
///
/// # Arguments
///
/// * `conn` - Database connection (usually a transaction)
/// * `update` - The row ID and dimensions to store
///
/// # Returns
///
/// * `Ok(usize)` - Number of rows changed (0 if the row no longer exists)
/// * `Err(Error)` - If a database error occurs
pub fn update_dimensions(conn: &Connection, update: &DimensionUpdate) -> Result<usize> {
    let mut stmt = conn
        .prepare_cached(
            "UPDATE images SET image_width = :width, image_height = :height WHERE id = :id",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    stmt.execute(rusqlite::named_params! {
        ":width": i64::from(update.dimensions.width),
        ":height": i64::from(update.dimensions.height),
        ":id": update.id.get(),
    })
    .map_err(|e| Error::database(e.to_string()))
}

/// Get an image by ID.
///
/// # Returns
///
/// * `Ok(Some(ImageRecord))` - The image if found
/// * `Ok(None)` - If the image does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_image(conn: &Connection, id: ImageId) -> Result<Option<ImageRecord>> {
    let result = conn.query_row(
        "SELECT id, image_path, image_width, image_height FROM images WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
        parse_image_row,
    );

    match result {
        Ok(image) => Ok(Some(image)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}
