// src/fetcher/mod.rs
// =============================================================================
// This module contains all concurrent fetching logic.
//
// Submodules:
// - result: FetchResult and BatchReport, the data a batch produces
// - worker: Fetches one URL and writes its body to one file
// - coordinator: Fans out one worker per URL, joins them all, builds the report
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// - async: Asynchronous code that can run concurrently
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod coordinator;
mod result;
mod worker;

// Re-export public items from submodules
// This lets users write `fetcher::fetch_all()` instead of
// `fetcher::coordinator::fetch_all()`
pub use coordinator::fetch_all;
pub use result::{BatchReport, FetchResult};
pub use worker::FetchConfig;
