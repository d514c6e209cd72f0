//! Parallel rendering of many independent pages.

use crate::renderer::{Options, RenderedPage, render_page_json};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// A single page response to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInput {
    /// Page identifier, echoed in the result.
    pub id: String,
    /// Page response JSON.
    pub source: String,
}

/// Result for a single page in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// Page identifier matching the input.
    pub id: String,
    /// Rendered page (present on success).
    pub page: Option<RenderedPage>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[derive(Debug, Clone, Serialize)]
pub struct BatchStats {
    /// Total number of pages processed.
    pub total: u32,
    /// Number of pages rendered.
    pub succeeded: u32,
    /// Number of pages that failed to decode.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to the global rayon pool.
    #[serde(default)]
    pub max_threads: Option<usize>,
}

/// Results in input order plus statistics.
#[derive(Debug, Clone, Serialize)]
pub struct BatchProcessingResult {
    /// Individual results for each input.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Renders every input independently; a failing page never affects others.
pub fn render_batch(
    inputs: Vec<BatchInput>,
    batch_options: &BatchOptions,
    options: &Options,
) -> BatchProcessingResult {
    let start = Instant::now();

    // Configure thread pool if max_threads is specified
    let pool = batch_options.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads)
            .build()
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match render_page_json(&input.source, options) {
            Ok(page) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    page: Some(page),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log::warn!("Failed to render page {}: {}", input.id, e);
                BatchResult {
                    id: input.id,
                    page: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if let Some(pool) = pool {
        pool.install(|| inputs.into_par_iter().map(process_input).collect())
    } else {
        inputs.into_par_iter().map(process_input).collect()
    };

    let stats = BatchStats {
        total,
        succeeded: succeeded.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    log::debug!(
        "Rendered {} pages ({} failed) in {:.2}ms",
        stats.total,
        stats.failed,
        stats.processing_time_ms
    );

    BatchProcessingResult { results, stats }
}
