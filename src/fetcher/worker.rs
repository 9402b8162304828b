// src/fetcher/worker.rs
// =============================================================================
// This module is the fetch worker: one concurrent unit of work per URL.
//
// What a worker does:
// 1. Opens its own HTTP session (own client, own timeout, own redirect policy)
// 2. Downloads the response body chunk by chunk into a private byte buffer
// 3. Writes the full buffer to its precomputed destination file
// 4. Produces exactly one FetchResult, success or failure
//
// The worker NEVER lets an error escape: every failure mode (DNS, connect,
// TLS, timeout, mid-stream read, buffer growth, file write) is caught here
// and converted into a failed FetchResult with a readable error_detail.
// Sibling workers share nothing with this one, so nothing here needs a lock.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Result<T, E>: For error handling
// - Ownership: The buffer and the result belong to this worker alone
// =============================================================================

use chrono::Utc;
use reqwest::{redirect, Client};
use std::path::PathBuf;
use std::time::Duration;

use super::result::FetchResult;

// How each worker configures its HTTP session
//
// Cloned into every worker so they stay fully independent; no transport
// state is shared between attempts.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Upper bound on the WHOLE attempt: connect + redirects + transfer
    pub timeout: Duration,
    /// Identifying client string sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (Web Scraper/1.0)".to_string(),
        }
    }
}

// Fetches a single URL and writes the body to its destination file
//
// Parameters:
//   config: session settings (timeout, user agent)
//   index: position of this URL in the input list (0-based)
//   url: the URL to fetch (owned, captured by the task)
//   destination: precomputed output path, derived from index by the coordinator
//
// Returns: exactly one FetchResult - this function has no error path of its
// own, failures come back as data
pub async fn fetch_one(
    config: &FetchConfig,
    index: usize,
    url: String,
    destination: PathBuf,
) -> FetchResult {
    let started_at = Utc::now();

    // Download the whole body into this worker's private buffer.
    // Any transport-level problem ends the attempt right here.
    let body = match download_body(config, &url).await {
        Ok(body) => body,
        Err(detail) => {
            return FetchResult::failure(index, url, destination, started_at, detail);
        }
    };

    // Transport succeeded - now persist the buffer. A write failure is a
    // local I/O failure: the fetched bytes are discarded and the result
    // records why.
    match tokio::fs::write(&destination, &body).await {
        Ok(()) => FetchResult::success(index, url, destination, started_at, body.len() as u64),
        Err(e) => FetchResult::failure(
            index,
            url,
            destination,
            started_at,
            format!("could not write output file: {}", e),
        ),
    }
}

// Performs the HTTP GET and accumulates the body chunk by chunk
//
// The returned Vec<u8> is the worker's response buffer: it grows as chunks
// arrive and is handed back whole once the stream ends.
//
// Note: the HTTP status code is deliberately NOT inspected. A 404 page still
// has a body, and we save whatever the server returned - only transport-level
// errors count as failures.
async fn download_body(config: &FetchConfig, url: &str) -> Result<Vec<u8>, String> {
    // One client per attempt: follows up to 5 redirects, enforces one coarse
    // total-duration timeout, sends our identifying user agent.
    let client = Client::builder()
        .timeout(config.timeout)
        .redirect(redirect::Policy::limited(5))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| format!("could not set up HTTP client: {}", e))?;

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| describe_transport_error(&e))?;

    let mut buffer = Vec::new();

    // chunk() yields Some(bytes) until the body is exhausted, then None.
    // Chunks are appended in arrival order; the buffer is never shared.
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| describe_transport_error(&e))?
    {
        // try_reserve lets a failed allocation fail THIS attempt instead of
        // aborting the whole process
        if buffer.try_reserve(chunk.len()).is_err() {
            return Err(format!(
                "out of memory growing response buffer ({} bytes so far)",
                buffer.len()
            ));
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer)
}

// Turns a reqwest error into a short human-readable cause
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Connection refused/reset
// - TLS certificate issues
// - Too many redirects
fn describe_transport_error(error: &reqwest::Error) -> String {
    // Convert error to string once to avoid lifetime issues
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            format!("connection failed: {}", error_string)
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why build a new Client per worker?
//    - Each attempt is fully self-contained, like opening and closing one
//      curl handle per thread
//    - No connection pooling or transport state crosses between workers
//    - Client::builder() lets us set the timeout and redirect policy once
//
// 2. What is chunk()?
//    - reqwest delivers the response body in pieces as they arrive
//    - Each call to chunk().await gives the next piece (or None at the end)
//    - We append each piece to our Vec<u8> - Vec handles growth for us,
//      no manual realloc needed
//
// 3. What is try_reserve?
//    - Normal Vec growth aborts the process if allocation fails
//    - try_reserve returns a Result instead, so ONE worker running out of
//      memory becomes one failed FetchResult, not a crash
//
// 4. Why map_err with a String?
//    - The worker's contract is "always return a FetchResult"
//    - So instead of propagating typed errors upward, every failure is
//      flattened to the message that ends up in error_detail
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.contains("Web Scraper"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_failed_result() {
        // Port 1 on localhost should refuse the connection immediately
        let config = FetchConfig {
            timeout: Duration::from_secs(2),
            ..FetchConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("page_1.html");

        let result = fetch_one(
            &config,
            0,
            "http://127.0.0.1:1/".to_string(),
            destination.clone(),
        )
        .await;

        assert!(!result.succeeded);
        assert_eq!(result.byte_count, 0);
        assert!(!result.error_detail.as_deref().unwrap_or("").is_empty());
        // No destination file gets created on a transport failure
        assert!(!destination.exists());
    }
}
