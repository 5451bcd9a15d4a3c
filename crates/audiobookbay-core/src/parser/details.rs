//! Detail page parser for audiobookbay.
//!
//! Extracts listing metadata and recovers the 40-hex-character info-hash.
//! Hash recovery tries a dedicated element first, then falls back to a
//! document-order scan; the fallback is a heuristic inherited from the
//! site's markup and is kept behind [`find_info_hash`] so a stricter
//! parser can replace it without touching callers.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::parser::labeled_or_unknown;
use crate::types::AudiobookDetails;

/// Title node on a detail page.
const TITLE_SELECTOR: &str = ".postTitle h1";

/// Element the site renders the info-hash into.
const HASH_SELECTOR: &str = "#magnetLink";

/// Free-text block carrying `Label: value` metadata lines.
const CONTENT_SELECTOR: &str = ".postContent";

const HASH_PATTERN: &str = "^[0-9a-fA-F]{40}$";

/// Fallback title when the page carries no usable title node.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Parses a listing detail page.
///
/// Never fails: a page with no recognizable structure yields a details
/// record with [`UNKNOWN_TITLE`] and no hash. The magnet URI is composed
/// by the caller, never here.
pub fn parse_details(html: &str) -> AudiobookDetails {
    let document = Html::parse_document(html);

    let title = select_text(&document, TITLE_SELECTOR)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let content = select_text(&document, CONTENT_SELECTOR).unwrap_or_default();

    AudiobookDetails {
        title,
        author: labeled_or_unknown(&content, "Author"),
        narrator: labeled_or_unknown(&content, "Read by"),
        format: labeled_or_unknown(&content, "Format"),
        bitrate: labeled_or_unknown(&content, "Bitrate"),
        info_hash: find_info_hash(&document),
        magnet_uri: None,
    }
}

/// Recovers the info-hash from a detail page.
///
/// Strategy 1: trimmed text of the dedicated hash element.
/// Strategy 2: first element in document order whose entire trimmed text
/// is exactly 40 hex characters. Scanning stops at the first match.
pub fn find_info_hash(document: &Html) -> Option<String> {
    primary_hash(document).or_else(|| scan_for_hash(document))
}

/// Trimmed text of the dedicated hash element, if present and non-empty.
fn primary_hash(document: &Html) -> Option<String> {
    let selector = Selector::parse(HASH_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    let text = element.text().collect::<String>().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Document-order scan for the first hash-shaped element text.
fn scan_for_hash(document: &Html) -> Option<String> {
    let hash_re = Regex::new(HASH_PATTERN).ok()?;

    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        let text = element.text().collect::<String>();
        let trimmed = text.trim();
        if hash_re.is_match(trimmed) {
            return Some(trimmed.to_string());
        }
    }

    None
}

/// Collected, trimmed text of the first element matching `raw_selector`.
fn select_text(document: &Html, raw_selector: &str) -> Option<String> {
    let selector = Selector::parse(raw_selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
