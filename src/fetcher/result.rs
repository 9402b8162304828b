// src/fetcher/result.rs
// =============================================================================
// This module defines the data that comes OUT of a fetch batch.
//
// Two types live here:
// - FetchResult: the outcome of fetching a single URL (one per input URL)
// - BatchReport: every FetchResult for one batch, plus total wall-clock time
//
// Key invariant: a batch over N URLs always produces exactly N FetchResults,
// in the original input order, even when some (or all) fetches fail. Failures
// are recorded as data, never dropped.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: A field that only sometimes has a value (error_detail)
// - Derive macros: Serialize/Deserialize for JSON output, Debug for printing
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// Represents the outcome of fetching a single URL
//
// Created by the worker that owned the URL and handed back to the
// coordinator when the worker finishes. Immutable after that point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    /// Position of this URL in the original input list (0-based)
    ///
    /// This is the stable identity of the result: output ordering and the
    /// destination file name both key off it, never off completion order.
    pub index: usize,

    /// The URL exactly as it was supplied
    pub url: String,

    /// Where the response body was (or would have been) written
    ///
    /// Computed from `index` alone, so re-running the same list always
    /// produces the same file layout.
    pub destination_path: PathBuf,

    /// Did the fetch AND the file write both succeed?
    pub succeeded: bool,

    /// Number of body bytes written to disk (0 on failure)
    pub byte_count: u64,

    /// When this worker started its attempt
    pub started_at: DateTime<Utc>,

    /// When this worker finished (success or failure)
    pub finished_at: DateTime<Utc>,

    /// Human-readable cause of failure; only present when succeeded is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl FetchResult {
    /// Builds a successful result; finished_at is stamped here
    pub fn success(
        index: usize,
        url: String,
        destination_path: PathBuf,
        started_at: DateTime<Utc>,
        byte_count: u64,
    ) -> Self {
        FetchResult {
            index,
            url,
            destination_path,
            succeeded: true,
            byte_count,
            started_at,
            finished_at: Utc::now(),
            error_detail: None,
        }
    }

    /// Builds a failed result; byte_count is always 0 on failure
    pub fn failure(
        index: usize,
        url: String,
        destination_path: PathBuf,
        started_at: DateTime<Utc>,
        error_detail: String,
    ) -> Self {
        FetchResult {
            index,
            url,
            destination_path,
            succeeded: false,
            byte_count: 0,
            started_at,
            finished_at: Utc::now(),
            error_detail: Some(error_detail),
        }
    }

    /// How long this one attempt took, from start to finish
    pub fn duration(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

// Everything the coordinator hands back for one batch
//
// results is ordered by index (input order), never by completion order.
// elapsed covers the whole batch: from just before the first worker was
// launched until the last one terminated.
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<FetchResult>,
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of URLs that were fetched and written successfully
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    /// Number of URLs that failed (transport or local I/O)
    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }

    /// Total bytes written across all successful fetches
    ///
    /// Failed results contribute zero by construction (their byte_count is 0),
    /// but we filter on succeeded anyway so the sum matches its definition.
    pub fn total_bytes(&self) -> u64 {
        self.results
            .iter()
            .filter(|r| r.succeeded)
            .map(|r| r.byte_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dummy_path(index: usize) -> PathBuf {
        PathBuf::from(format!("out/page_{}.html", index + 1))
    }

    #[test]
    fn test_failure_has_zero_bytes_and_a_detail() {
        let result = FetchResult::failure(
            0,
            "https://example.com".to_string(),
            dummy_path(0),
            Utc::now(),
            "connection failed".to_string(),
        );
        assert!(!result.succeeded);
        assert_eq!(result.byte_count, 0);
        assert!(!result.error_detail.as_deref().unwrap_or("").is_empty());
    }

    #[test]
    fn test_success_has_no_detail() {
        let result = FetchResult::success(
            1,
            "https://example.com".to_string(),
            dummy_path(1),
            Utc::now(),
            1024,
        );
        assert!(result.succeeded);
        assert_eq!(result.byte_count, 1024);
        assert!(result.error_detail.is_none());
    }

    #[test]
    fn test_total_bytes_counts_successes_only() {
        let report = BatchReport {
            results: vec![
                FetchResult::success(0, "a".into(), dummy_path(0), Utc::now(), 100),
                FetchResult::failure(1, "b".into(), dummy_path(1), Utc::now(), "x".into()),
                FetchResult::success(2, "c".into(), dummy_path(2), Utc::now(), 250),
            ],
            elapsed: Duration::from_secs(1),
        };
        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.total_bytes(), 350);
    }

    #[test]
    fn test_json_output_skips_missing_detail() {
        let result = FetchResult::success(
            0,
            "https://example.com".to_string(),
            dummy_path(0),
            Utc::now(),
            5,
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("error_detail"));
    }
}
