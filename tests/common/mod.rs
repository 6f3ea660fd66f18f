//! Shared test harness for integration tests.
//!
//! Provides [`TestCatalog`], a file-backed SQLite catalog with an `images`
//! table inside a temporary directory, plus helpers for writing image
//! fixtures next to it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dimfill_common::ImageId;
use dimfill_db::queries::images::get_image;
use image::{ImageFormat, RgbImage};
use rusqlite::Connection;
use tempfile::TempDir;

/// Catalog table layout used by the photo library this tool maintains.
pub const IMAGES_TABLE: &str = "CREATE TABLE images (
    id INTEGER PRIMARY KEY,
    image_path VARCHAR NOT NULL UNIQUE,
    image_mtime DATETIME,
    image_description VARCHAR,
    image_width INTEGER,
    image_height INTEGER
)";

/// Temporary catalog database plus a directory for image files.
pub struct TestCatalog {
    pub dir: TempDir,
    pub db_path: PathBuf,
}

impl TestCatalog {
    /// Create a catalog with an empty `images` table.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("catalog.db");
        let conn = Connection::open(&db_path).expect("failed to create catalog");
        conn.execute_batch(IMAGES_TABLE)
            .expect("failed to create images table");
        Self { dir, db_path }
    }

    /// Open a fresh connection to the catalog.
    pub fn conn(&self) -> Connection {
        Connection::open(&self.db_path).expect("failed to open catalog")
    }

    /// Insert an image row and return its ID.
    pub fn insert(&self, path: &Path, width: Option<i64>, height: Option<i64>) -> ImageId {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO images (image_path, image_width, image_height) VALUES (?1, ?2, ?3)",
            rusqlite::params![path.to_string_lossy().into_owned(), width, height],
        )
        .expect("failed to insert image row");
        ImageId::from(conn.last_insert_rowid())
    }

    /// Stored `(image_width, image_height)` for a row.
    pub fn dimensions(&self, id: ImageId) -> (Option<i64>, Option<i64>) {
        let image = get_image(&self.conn(), id)
            .expect("query failed")
            .expect("image row missing");
        (image.image_width, image.image_height)
    }

    /// Write a PNG of the given size and return its path.
    pub fn write_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        RgbImage::new(width, height)
            .save_with_format(&path, ImageFormat::Png)
            .expect("failed to write png fixture");
        path
    }

    /// Write a JPEG of the given size and return its path.
    pub fn write_jpeg(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        RgbImage::new(width, height)
            .save_with_format(&path, ImageFormat::Jpeg)
            .expect("failed to write jpeg fixture");
        path
    }

    /// Write arbitrary text and return its path.
    pub fn write_text(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write text fixture");
        path
    }

    /// Path inside the catalog directory that is never created.
    pub fn missing_path(&self, name: &str) -> PathBuf {
        self.dir.path().join("missing").join(name)
    }
}
