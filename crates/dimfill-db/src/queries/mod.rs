//! Database query modules.
//!
//! - images: selection of rows lacking dimensions and per-row updates

pub mod images;
