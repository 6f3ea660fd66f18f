//! Image dimension probing.
//!
//! The [`DimensionProber`] trait is the seam between the backfill procedure
//! and image decoding. [`ImageProber`] implements it with the `image` crate.

use std::path::Path;

use dimfill_common::{Error, Result};
use dimfill_db::models::Dimensions;
use image::ImageReader;

/// Measures the pixel dimensions of image files.
pub trait DimensionProber {
    /// Human-readable name identifying this prober implementation.
    fn name(&self) -> &'static str;

    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Read the width and height of the image at `path`.
    ///
    /// Any file handle opened here is closed before returning, on success
    /// and on error.
    fn dimensions(&self, path: &Path) -> Result<Dimensions>;
}

/// Prober backed by the `image` crate.
///
/// The format is detected from the file's leading bytes, falling back to the
/// extension, so a PNG saved as `photo.jpg` is still measured. Only the
/// header is read.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageProber;

impl ImageProber {
    /// Create a new image prober.
    pub fn new() -> Self {
        Self
    }
}

impl DimensionProber for ImageProber {
    fn name(&self) -> &'static str {
        "image"
    }

    fn dimensions(&self, path: &Path) -> Result<Dimensions> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        if reader.format().is_none() {
            return Err(Error::image("unrecognized image format"));
        }

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| Error::image(e.to_string()))?;

        let dimensions = Dimensions::new(width, height);
        if dimensions.is_empty() {
            return Err(Error::image(format!("image has no pixels ({})", dimensions)));
        }
        Ok(dimensions)
    }
}
