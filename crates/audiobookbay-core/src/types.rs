//! Core data types for the audiobookbay scraper.

use serde::{Deserialize, Serialize};

/// Sentinel used for metadata fields that are absent in the source markup.
pub const UNKNOWN: &str = "Unknown";

/// A single audiobook listing from a search results page.
///
/// Metadata fields that cannot be located in the listing markup are set
/// to [`UNKNOWN`] rather than omitted. The `url` is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Listing title
    pub title: String,

    /// Absolute URL of the listing's detail page
    pub url: String,

    /// Reported size (e.g., "1.2 GBs")
    pub size: String,

    /// Audio language (e.g., "English")
    pub language: String,

    /// Site category (e.g., "Fantasy")
    pub category: String,

    /// Audio format (e.g., "MP3")
    pub format: String,
}

/// One extracted page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Listings in page order
    pub results: Vec<SearchResult>,

    /// Whether the pagination controls advertise a following page
    pub has_next_page: bool,
}

/// Metadata extracted from a single listing's detail page.
///
/// `magnet_uri` is derived from `info_hash` and the title; it is present
/// if and only if a valid hash was recovered from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudiobookDetails {
    /// Audiobook title
    pub title: String,

    /// Author name, or [`UNKNOWN`]
    pub author: String,

    /// Narrator name ("Read by" on the site), or [`UNKNOWN`]
    pub narrator: String,

    /// Audio format, or [`UNKNOWN`]
    pub format: String,

    /// Audio bitrate, or [`UNKNOWN`]
    pub bitrate: String,

    /// 40-hex-character info-hash, if one was found on the page
    pub info_hash: Option<String>,

    /// Magnet URI synthesized from the hash and title
    pub magnet_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult {
            title: "Test Book".to_string(),
            url: "https://audiobookbay.lu/abss/test-book/".to_string(),
            size: "500 MBs".to_string(),
            language: "English".to_string(),
            category: "Sci-Fi".to_string(),
            format: "MP3".to_string(),
        };

        let json = serde_json::to_string(&result).expect("Serialization should succeed");
        let deserialized: SearchResult =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_details_with_absent_hash() {
        let details = AudiobookDetails {
            title: "Minimal".to_string(),
            author: UNKNOWN.to_string(),
            narrator: UNKNOWN.to_string(),
            format: UNKNOWN.to_string(),
            bitrate: UNKNOWN.to_string(),
            info_hash: None,
            magnet_uri: None,
        };

        let json = serde_json::to_string(&details).expect("Serialization should succeed");
        let deserialized: AudiobookDetails =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(details, deserialized);
        assert!(deserialized.magnet_uri.is_none());
    }

    #[test]
    fn test_search_page_default_is_empty() {
        let page = SearchPage::default();
        assert!(page.results.is_empty());
        assert!(!page.has_next_page);
    }
}
