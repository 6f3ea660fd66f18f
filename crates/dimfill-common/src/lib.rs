//! Dimfill-Common: Shared types and error handling.
//!
//! This crate provides common functionality used across dimfill:
//!
//! - **Typed IDs**: a wrapper around the integer primary key of image rows
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use dimfill_common::{Error, ImageId, Result};
//!
//! let id = ImageId::from(42);
//! assert_eq!(id.to_string(), "42");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("/photos/missing.jpg"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::ImageId;
