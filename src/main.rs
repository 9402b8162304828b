// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the URL list (from arguments or from a file) and soft-validate it
// 3. Make sure the output directory exists, then run the fetch batch
// 4. Print the results table (or JSON) and the batch summary
// 5. Exit with proper code (0 = all fetched, 1 = some failed, 2 = error)
//
// Rust concepts used:
// - async/await: Because we fetch many URLs concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod fetcher; // src/fetcher/ - concurrent fetching logic
mod urls; // src/urls.rs - URL list load/save/validation

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use fetcher::{BatchReport, FetchConfig};
use std::path::Path;
use std::time::Duration;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{bail, Result};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every URL fetched and written
//   Ok(1) = at least one URL failed
//   Err = unexpected error (reported as exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Urls {
            urls,
            output_dir,
            timeout,
            json,
            save_list,
        } => handle_fetch(urls, &output_dir, timeout, json, save_list.as_deref()).await,
        Commands::File {
            path,
            output_dir,
            timeout,
            json,
        } => {
            // Load the list first; a missing/unreadable file is a hard error
            let urls = urls::load_url_list(&path)?;
            println!("📂 Loaded {} URL(s) from {}", urls.len(), path.display());
            handle_fetch(urls, &output_dir, timeout, json, None).await
        }
    }
}

// Runs one fetch batch end to end
// Parameters:
//   urls: ordered URL list, not yet validated
//   output_dir: where the page_<n>.html files go
//   timeout_secs: per-URL total time budget
//   json: whether to output JSON format
//   save_list: optional path to persist the validated list to
async fn handle_fetch(
    urls: Vec<String>,
    output_dir: &Path,
    timeout_secs: u64,
    json: bool,
    save_list: Option<&Path>,
) -> Result<i32> {
    // Drop anything that doesn't look like an http(s) URL (with a warning)
    let urls = urls::filter_valid_urls(urls);

    if urls.is_empty() {
        bail!("no valid URLs to fetch");
    }

    if let Some(path) = save_list {
        urls::save_url_list(path, &urls)?;
        println!("💾 Saved {} URL(s) to {}", urls.len(), path.display());
    }

    // The output directory must exist before any worker runs; the workers
    // themselves only ever create files inside it
    std::fs::create_dir_all(output_dir)?;

    println!(
        "🔍 Fetching {} URL(s) into {}/ using {} workers...\n",
        urls.len(),
        output_dir.display(),
        urls.len()
    );

    let config = FetchConfig {
        timeout: Duration::from_secs(timeout_secs),
        ..FetchConfig::default()
    };

    // Fan out, fetch everything, join
    let report = fetcher::fetch_all(urls, output_dir, &config).await;

    // Print results and determine exit code
    print_results(&report, json)?;

    if report.failure_count() > 0 {
        Ok(1) // Exit code 1 = some fetches failed
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Prints the results either as a table or JSON
fn print_results(report: &BatchReport, json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(&report.results)?;
        println!("{}", json_output);
    } else {
        // Print human-readable table
        print_table(report);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(report: &BatchReport) {
    // Print table header
    println!(
        "{:<4} {:<10} {:<50} {:<12} {:<10} {:<30}",
        "ID", "STATUS", "URL", "SIZE (KB)", "TIME (S)", "DETAIL"
    );
    println!("{}", "=".repeat(118));

    // Print each result, in input order
    for result in &report.results {
        let status = if result.succeeded {
            "✅ OK"
        } else {
            "❌ FAILED"
        };

        // Truncate URL if too long for display
        let url_display = truncate_for_display(&result.url);

        // Successful rows show the output file, failed rows show the cause
        let detail = match &result.error_detail {
            Some(cause) => cause.clone(),
            None => result.destination_path.display().to_string(),
        };

        println!(
            "{:<4} {:<10} {:<50} {:<12.2} {:<10.2} {:<30}",
            result.index + 1,
            status,
            url_display,
            result.byte_count as f64 / 1024.0,
            result.duration().as_secs_f64(),
            detail
        );
    }

    println!();

    // Print summary
    let total = report.results.len();
    let ok_count = report.success_count();
    let total_bytes = report.total_bytes();

    println!("📊 Summary:");
    println!("   ✅ Succeeded: {} / {}", ok_count, total);
    println!("   ❌ Failed: {} / {}", total - ok_count, total);
    println!(
        "   💾 Total downloaded: {} bytes ({:.2} KB)",
        total_bytes,
        total_bytes as f64 / 1024.0
    );
    println!("   ⏱️  Total time: {:.2}s", report.elapsed.as_secs_f64());
}

// Shortens a URL to fit its table column
//
// Counts characters, not bytes: slicing at a byte offset would panic on a
// URL whose 47th byte sits inside a multibyte UTF-8 character.
fn truncate_for_display(url: &str) -> String {
    if url.chars().count() > 47 {
        let head: String = url.chars().take(47).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchResult;
    use chrono::Utc;
    use std::path::PathBuf;

    #[test]
    fn test_short_urls_display_unchanged() {
        assert_eq!(
            truncate_for_display("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn test_truncation_survives_multibyte_urls() {
        // 46 ASCII bytes followed by multibyte characters puts a char
        // boundary violation exactly where a byte-offset slice would cut
        let url = format!("{}日本語データ", "a".repeat(46));
        let display = truncate_for_display(&url);
        assert!(display.ends_with("..."));
        assert_eq!(display.chars().count(), 50);
    }

    #[test]
    fn test_print_table_with_multibyte_url() {
        let url = format!("https://example.com/{}日本語データ", "a".repeat(26));
        let report = BatchReport {
            results: vec![FetchResult::success(
                0,
                url,
                PathBuf::from("scraped_data/page_1.html"),
                Utc::now(),
                10,
            )],
            elapsed: Duration::from_secs(1),
        };
        // Must render without panicking
        print_table(&report);
    }
}
