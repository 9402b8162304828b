// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "page-fetcher",
    version = "0.1.0",
    about = "A CLI tool to fetch batches of URLs concurrently and save each page to disk",
    long_about = "page-fetcher downloads every URL in a batch at the same time - one worker per URL - \
                  writes each body to page_<n>.html in the output directory, and prints a per-URL \
                  results table with an aggregate summary."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (urls, file)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch URLs given directly on the command line
    ///
    /// Example: page-fetcher urls https://example.com https://example.org
    Urls {
        /// One or more URLs to fetch (fetched in the order given)
        ///
        /// These are positional arguments; at least one is required
        #[arg(required = true)]
        urls: Vec<String>,

        /// Directory the page_<n>.html files are written into
        ///
        /// Created if it doesn't exist yet
        #[arg(long, default_value = "scraped_data")]
        output_dir: PathBuf,

        /// Total time budget per URL in seconds (connect + transfer)
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Also save the (validated) URL list to this file, one per line
        #[arg(long)]
        save_list: Option<PathBuf>,
    },

    /// Fetch URLs listed in a text file, one per line
    ///
    /// Example: page-fetcher file urls.txt --output-dir pages
    File {
        /// Path to the URL list file (one URL per line, blank lines skipped)
        path: PathBuf,

        /// Directory the page_<n>.html files are written into
        #[arg(long, default_value = "scraped_data")]
        output_dir: PathBuf,

        /// Total time budget per URL in seconds (connect + transfer)
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (like "urls OR file")
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why PathBuf instead of String for paths?
//    - PathBuf is the owned path type; it handles platform differences
//    - clap converts the argument for us automatically
//
// 4. What does Option<PathBuf> mean for --save-list?
//    - The flag is optional: None when the user didn't pass it
//    - Some(path) when they did
// -----------------------------------------------------------------------------
