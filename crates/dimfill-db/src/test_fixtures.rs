//! Shared helpers for unit tests in this crate.

use dimfill_common::ImageId;
use rusqlite::Connection;

/// Minimal `images` table matching the catalog layout.
pub const IMAGES_TABLE: &str = "CREATE TABLE images (
    id INTEGER PRIMARY KEY,
    image_path VARCHAR NOT NULL UNIQUE,
    image_mtime DATETIME,
    image_description VARCHAR,
    image_width INTEGER,
    image_height INTEGER
)";

/// Open an in-memory database with the `images` table created.
pub fn memory_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(IMAGES_TABLE).unwrap();
    conn
}

/// Insert an image row and return its ID.
pub fn insert_image(
    conn: &Connection,
    path: &str,
    width: Option<i64>,
    height: Option<i64>,
) -> ImageId {
    conn.execute(
        "INSERT INTO images (image_path, image_width, image_height) VALUES (?1, ?2, ?3)",
        rusqlite::params![path, width, height],
    )
    .unwrap();
    ImageId::from(conn.last_insert_rowid())
}
