// src/fetcher/coordinator.rs
// =============================================================================
// This module is the fetch coordinator: it fans a batch of URLs out to
// workers, waits for every one of them, and assembles the final report.
//
// How a batch runs:
// 1. Derive each URL's destination file name from its position in the list
// 2. Record the batch start time, then spawn one tokio task per URL - every
//    URL gets its own worker, launched immediately (no pool, no queue)
// 3. join_all() blocks until EVERY worker has terminated - the coordinator
//    never moves on with a partial batch
// 4. Collect results in input order; whichever worker finished first is
//    invisible in the output
//
// A failed worker only affects its own FetchResult. Nothing a worker does can
// abort its siblings or the join.
//
// Rust concepts:
// - tokio::spawn: Runs a future as an independent task on the runtime
// - Closures capturing by value: Each task owns its URL and destination
// - join_all: Waits for a whole Vec of tasks at once
// =============================================================================

use chrono::{DateTime, Utc};
use futures::future;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::task::JoinError;

use super::result::{BatchReport, FetchResult};
use super::worker::{self, FetchConfig};

// Computes where the body for the URL at `index` gets written
//
// The name depends only on the position (1-based, matching the display
// table), never on the URL itself. Duplicate URLs therefore can't collide,
// and re-running the same list overwrites the same files.
pub fn destination_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("page_{}.html", index + 1))
}

// Fetches every URL in the batch concurrently
//
// Parameters:
//   urls: the ordered URL list (the caller guarantees it is non-empty)
//   output_dir: existing directory the bodies are written into
//   config: per-worker session settings
//
// Returns: a BatchReport with exactly one FetchResult per input URL, in
// input order, plus the wall-clock time for the whole batch.
pub async fn fetch_all(urls: Vec<String>, output_dir: &Path, config: &FetchConfig) -> BatchReport {
    let batch_start = Instant::now();

    // Launch one worker per URL, eagerly. Each task captures its own copy of
    // the URL, its destination path, and the config - after this loop the
    // workers share nothing.
    let mut handles = Vec::with_capacity(urls.len());
    let mut launched = Vec::with_capacity(urls.len());
    for (index, url) in urls.iter().enumerate() {
        let config = config.clone();
        let url = url.clone();
        let destination = destination_path(output_dir, index);

        println!("🧵 Worker {} started for: {}", index + 1, url);

        // Launch time is kept on the coordinator's side too, so even a
        // worker that never reports back gets honest timestamps
        launched.push(Utc::now());
        handles.push(tokio::spawn(async move {
            worker::fetch_one(&config, index, url, destination).await
        }));
    }

    // Full barrier: wait for every worker to terminate, in launch order.
    // join_all preserves input order, so outcomes[i] belongs to urls[i] no
    // matter which worker actually finished first.
    let outcomes = future::join_all(handles).await;
    let elapsed = batch_start.elapsed();

    // One result per input URL, always. A worker can't normally escape
    // without producing a result, but if its task panicked we still record a
    // failure at its index rather than dropping the slot.
    let mut results = Vec::with_capacity(urls.len());
    for (((index, url), outcome), launched_at) in
        urls.into_iter().enumerate().zip(outcomes).zip(launched)
    {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => results.push(crashed_result(
                index,
                url,
                destination_path(output_dir, index),
                launched_at,
                &e,
            )),
        }
    }

    BatchReport { results, elapsed }
}

// Converts a crashed task into a failed result at its slot
//
// The launch timestamp recorded just before the spawn stands in for the
// started_at the worker never got to report.
fn crashed_result(
    index: usize,
    url: String,
    destination: PathBuf,
    launched_at: DateTime<Utc>,
    error: &JoinError,
) -> FetchResult {
    FetchResult::failure(
        index,
        url,
        destination,
        launched_at,
        format!("worker crashed: {}", error),
    )
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one task per URL instead of a worker pool?
//    - Simplicity: a batch of N URLs is exactly N tasks, nothing to tune
//    - tokio tasks are cheap (not OS threads), so eager fan-out is fine for
//      the batch sizes this tool handles
//
// 2. What does join_all give us?
//    - It polls every JoinHandle until all of them are done
//    - The output Vec is in the same order as the input Vec, which is how
//      completion order stays invisible
//    - It's like Promise.all() in JavaScript, but the "promises" are already
//      running on the tokio runtime
//
// 3. Why is there no Mutex anywhere?
//    - Each worker owns its URL, its buffer, and its destination file
//    - The only shared step is the join itself, and the runtime handles that
//    - No shared mutable state means no locks to get wrong
// -----------------------------------------------------------------------------
