//! Database models for dimfill.
//!
//! These structs map onto the subset of the `images` table that dimfill
//! reads and writes. Other columns are left alone.

use std::fmt;
use std::path::Path;

use dimfill_common::ImageId;
use serde::{Deserialize, Serialize};

/// A row of the `images` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: ImageId,
    pub image_path: String,
    pub image_width: Option<i64>,
    pub image_height: Option<i64>,
}

impl ImageRecord {
    /// Whether both dimensions are present and positive.
    pub fn has_dimensions(&self) -> bool {
        matches!(
            (self.image_width, self.image_height),
            (Some(w), Some(h)) if w > 0 && h > 0
        )
    }
}

/// An image row selected because its dimensions are missing or zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub id: ImageId,
    pub image_path: String,
}

impl Candidate {
    /// The referenced file as a filesystem path.
    pub fn path(&self) -> &Path {
        Path::new(&self.image_path)
    }
}

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A staged write of measured dimensions for one row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionUpdate {
    pub id: ImageId,
    pub dimensions: Dimensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(width: Option<i64>, height: Option<i64>) -> ImageRecord {
        ImageRecord {
            id: ImageId::from(1),
            image_path: "/photos/a.jpg".to_string(),
            image_width: width,
            image_height: height,
        }
    }

    #[test]
    fn test_has_dimensions() {
        assert!(record(Some(640), Some(480)).has_dimensions());
        assert!(!record(None, Some(480)).has_dimensions());
        assert!(!record(Some(640), None).has_dimensions());
        assert!(!record(Some(0), Some(480)).has_dimensions());
        assert!(!record(Some(640), Some(0)).has_dimensions());
        assert!(!record(None, None).has_dimensions());
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(Dimensions::new(100, 50).to_string(), "100x50");
    }

    #[test]
    fn test_dimensions_is_empty() {
        assert!(Dimensions::new(0, 50).is_empty());
        assert!(Dimensions::new(100, 0).is_empty());
        assert!(!Dimensions::new(1, 1).is_empty());
    }

    #[test]
    fn test_candidate_path() {
        let candidate = Candidate {
            id: ImageId::from(3),
            image_path: "/photos/b.png".to_string(),
        };
        assert_eq!(candidate.path(), Path::new("/photos/b.png"));
    }
}
