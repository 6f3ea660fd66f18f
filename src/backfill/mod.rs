//! Single-pass backfill of missing image dimensions.
//!
//! [`DimensionBackfiller`] selects every image row lacking a width or height,
//! measures each referenced file one at a time, and writes all measurements
//! back in one transaction at the end. Missing and undecodable files are
//! logged and counted but never abort the run; only store failures do.

mod report;

pub use report::BackfillReport;

use std::path::Path;

use anyhow::{Context, Result};
use dimfill_db::models::{Candidate, DimensionUpdate};
use dimfill_db::store::{DimensionStore, SqliteStore};
use tracing::{debug, error, info, warn};

use crate::probe::{DimensionProber, ImageProber};

/// Fills in missing dimensions for the rows of a [`DimensionStore`].
pub struct DimensionBackfiller<S, P> {
    store: S,
    prober: P,
}

impl<S: DimensionStore, P: DimensionProber> DimensionBackfiller<S, P> {
    /// Create a backfiller over `store`, measuring files with `prober`.
    pub fn new(store: S, prober: P) -> Self {
        Self { store, prober }
    }

    /// Run one pass over the current candidate snapshot.
    ///
    /// Returns an error only if selecting candidates or committing the
    /// staged updates fails. On a commit failure nothing is persisted.
    pub fn run(&mut self) -> dimfill_common::Result<BackfillReport> {
        let candidates = self.store.find_missing_dimensions()?;
        info!("Found {} images with missing dimensions.", candidates.len());

        let mut report = BackfillReport::new(candidates.len());
        if candidates.is_empty() {
            info!("No images to update.");
            return Ok(report);
        }

        debug!(prober = self.prober.name(), "Measuring candidates");

        let mut staged = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            if let Some(update) = self.measure(candidate, &mut report) {
                staged.push(update);
            }
        }

        if !staged.is_empty() {
            report.committed = self.store.commit_dimensions(&staged)?;
            debug!("Committed {} dimension updates", report.committed);
        }

        Ok(report)
    }

    /// Consume the backfiller, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn measure(
        &self,
        candidate: &Candidate,
        report: &mut BackfillReport,
    ) -> Option<DimensionUpdate> {
        let path = candidate.path();

        if !self.prober.exists(path) {
            warn!(
                "Image {} not found at path: {}",
                candidate.id, candidate.image_path
            );
            report.missing += 1;
            return None;
        }

        match self.prober.dimensions(path) {
            Ok(dimensions) => {
                info!(
                    "Updated image {}: {} ({})",
                    candidate.id, candidate.image_path, dimensions
                );
                report.updated += 1;
                Some(DimensionUpdate {
                    id: candidate.id,
                    dimensions,
                })
            }
            Err(e) => {
                error!(
                    "Error processing image {} at {}: {}",
                    candidate.id, candidate.image_path, e
                );
                report.errors += 1;
                None
            }
        }
    }
}

/// Backfill the SQLite catalog at `store_path`.
///
/// Opens the store, runs a [`DimensionBackfiller`] with an [`ImageProber`],
/// and closes the connection. The connection is also released when any step
/// fails.
pub fn run(store_path: &Path) -> Result<BackfillReport> {
    info!("Starting update process on database: {}", store_path.display());

    let store = SqliteStore::open(store_path)
        .with_context(|| format!("Failed to open store {}", store_path.display()))?;

    let mut backfiller = DimensionBackfiller::new(store, ImageProber::new());
    let report = backfiller
        .run()
        .with_context(|| format!("Backfill of {} aborted", store_path.display()))?;

    backfiller
        .into_store()
        .close()
        .context("Failed to close store")?;

    Ok(report)
}
