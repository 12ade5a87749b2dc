use anyhow::{Context, Result};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, trace};

use super::{Canonicalizer, LineOutcome};

/// Splits lines into at most `workers` contiguous chunks, in input order.
pub fn chunk_lines(lines: Vec<String>, workers: usize) -> Vec<Vec<String>> {
    if lines.is_empty() {
        return Vec::new();
    }

    let chunk_size = lines.len().div_ceil(workers.max(1));
    let mut rest = lines.into_iter().peekable();
    let mut chunks: Vec<Vec<String>> = Vec::new();
    while rest.peek().is_some() {
        chunks.push(rest.by_ref().take(chunk_size).collect());
    }
    chunks
}

/// Runs the per-line stage across a bounded set of blocking tasks.
///
/// Each worker fills its own result list; lists are merged here, by a single
/// owner, in chunk order. Chunks are contiguous and `join_all` yields results
/// in the order the futures were given, so outcomes come back in input order.
pub async fn process_in_workers(
    canonicalizer: Arc<Canonicalizer>,
    lines: Vec<String>,
    workers: usize,
) -> Result<Vec<LineOutcome>> {
    let chunks = chunk_lines(lines, workers);
    debug!("Spawning {} workers", chunks.len());

    let handles = chunks.into_iter().enumerate().map(|(worker_id, chunk)| {
        let canonicalizer = canonicalizer.clone();
        tokio::task::spawn_blocking(move || {
            trace!("Worker {} processing {} lines", worker_id, chunk.len());
            chunk
                .iter()
                .filter_map(|line| canonicalizer.ingest(line))
                .collect::<Vec<_>>()
        })
    });

    let mut outcomes = Vec::new();
    for (worker_id, joined) in join_all(handles).await.into_iter().enumerate() {
        let local = joined.with_context(|| format!("Worker {} failed", worker_id))?;
        trace!("Worker {} returned {} outcomes", worker_id, local.len());
        outcomes.extend(local);
    }
    Ok(outcomes)
}
