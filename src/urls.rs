// src/urls.rs
// =============================================================================
// This module manages the URL list that feeds a fetch batch.
//
// Responsibilities:
// - Load a URL list from a text file (one URL per line, blank lines skipped)
// - Save the current URL list back to a text file
// - Soft-validate URLs before fetching: anything that doesn't look like an
//   http:// or https:// URL is warned about and skipped
//
// The fetcher itself never validates URLs - by the time a batch starts, this
// module has already decided what goes in.
//
// Rust concepts:
// - Result: For error handling on file I/O
// - Iterators: filter/map chains over lines of text
// - Url: For parsing and checking URL schemes
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

// Loads a URL list from a text file
//
// Format: one URL per line. Surrounding whitespace is trimmed and blank
// lines are skipped, so hand-edited files are fine.
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not open URL file '{}'", path.display()))?;

    let urls: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    Ok(urls)
}

// Saves a URL list to a text file, one URL per line
pub fn save_url_list(path: &Path, urls: &[String]) -> Result<()> {
    let mut content = String::new();
    for url in urls {
        content.push_str(url);
        content.push('\n');
    }

    std::fs::write(path, content)
        .with_context(|| format!("could not create file '{}'", path.display()))?;

    Ok(())
}

// Keeps only URLs that look fetchable, warning about the rest
//
// "Looks fetchable" is a soft check: the string parses as a URL and its
// scheme is http or https. The original interactive tool asked "continue
// anyway?" here; as a non-interactive CLI we warn and skip instead.
pub fn filter_valid_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .filter(|url| {
            if looks_like_http_url(url) {
                true
            } else {
                eprintln!("⚠️  Skipping '{}': URL should start with http:// or https://", url);
                false
            }
        })
        .collect()
}

// Checks whether a string parses as an http(s) URL
fn looks_like_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(looks_like_http_url("http://example.com"));
        assert!(looks_like_http_url("https://example.com/page?q=1"));
    }

    #[test]
    fn test_rejects_other_schemes_and_garbage() {
        assert!(!looks_like_http_url("ftp://example.com"));
        assert!(!looks_like_http_url("example.com"));
        assert!(!looks_like_http_url("not a url at all"));
    }

    #[test]
    fn test_filter_drops_invalid_keeps_order() {
        let urls = vec![
            "https://a.example".to_string(),
            "nonsense".to_string(),
            "http://b.example".to_string(),
        ];
        let kept = filter_valid_urls(urls);
        assert_eq!(kept, vec!["https://a.example", "http://b.example"]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        let urls = vec![
            "https://a.example".to_string(),
            "https://b.example".to_string(),
        ];

        save_url_list(&path, &urls).unwrap();
        let loaded = load_url_list(&path).unwrap();
        assert_eq!(loaded, urls);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        std::fs::write(&path, "https://a.example\n\n  \nhttps://b.example\n").unwrap();

        let loaded = load_url_list(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = load_url_list(Path::new("definitely/not/here.txt"));
        assert!(result.is_err());
    }
}
