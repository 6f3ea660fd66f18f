//! Dimfill - backfill missing pixel dimensions in an image catalog.
//!
//! This library crate exposes the backfill procedure for the binary and for
//! integration testing.

pub mod backfill;
pub mod probe;
