//! HTML parsers for audiobookbay pages.
//!
//! Contains modules for parsing the two page types the site serves:
//! search results pages and listing detail pages.

pub mod details;
pub mod search;

pub use details::parse_details;
pub use search::parse_search_results;

use crate::types::UNKNOWN;

/// Extracts a `Label: value` line from a free-text block.
///
/// The value runs from the colon to the end of the line and is trimmed.
/// Returns `None` when the label is missing or its value is blank.
pub(crate) fn extract_labeled(text: &str, label: &str) -> Option<String> {
    let pattern = format!(r"{}:\s*([^\n]+)", regex::escape(label));
    let re = regex::Regex::new(&pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Like [`extract_labeled`], defaulting to the [`UNKNOWN`] sentinel.
pub(crate) fn labeled_or_unknown(text: &str, label: &str) -> String {
    extract_labeled(text, label).unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_labeled_basic() {
        let text = "Language: English\nCategory: Sci-Fi\n";
        assert_eq!(extract_labeled(text, "Language"), Some("English".to_string()));
        assert_eq!(extract_labeled(text, "Category"), Some("Sci-Fi".to_string()));
    }

    #[test]
    fn test_extract_labeled_stops_at_end_of_line() {
        let text = "Format: MP3\nBitrate: 64 Kbps";
        assert_eq!(extract_labeled(text, "Format"), Some("MP3".to_string()));
    }

    #[test]
    fn test_extract_labeled_missing_label() {
        assert_eq!(extract_labeled("no labels here", "Size"), None);
    }

    #[test]
    fn test_extract_labeled_blank_value() {
        assert_eq!(extract_labeled("Size:   \nNext: x", "Size"), None);
    }

    #[test]
    fn test_labeled_or_unknown_default() {
        assert_eq!(labeled_or_unknown("nothing", "Author"), "Unknown");
    }

    #[test]
    fn test_extract_labeled_multiword_label() {
        let text = "Read by: Michael Kramer\n";
        assert_eq!(
            extract_labeled(text, "Read by"),
            Some("Michael Kramer".to_string())
        );
    }
}
