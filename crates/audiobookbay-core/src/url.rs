//! URL helper functions for audiobookbay.
//!
//! Provides the search query builder and listing URL resolution.

/// Site origin all relative listing links are resolved against.
pub const BASE_URL: &str = "https://audiobookbay.lu";

/// Splits a raw search string into tokens, keeping double-quoted phrases
/// intact.
///
/// Unquoted words become individual tokens; a quoted phrase becomes a
/// single token with the quotes stripped. An unterminated quote runs to
/// the end of the input.
///
/// # Example
/// ```
/// use audiobookbay_core::url::tokenize_query;
/// let tokens = tokenize_query(r#"elephant "moby dick""#);
/// assert_eq!(tokens, vec!["elephant".to_string(), "moby dick".to_string()]);
/// ```
pub fn tokenize_query(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in raw.chars() {
        match c {
            '"' => {
                if in_quotes {
                    // Closing quote ends the phrase, even if empty-adjacent
                    tokens.push(std::mem::take(&mut current));
                    in_quotes = false;
                } else {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                    in_quotes = true;
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens.retain(|t| !t.trim().is_empty());
    tokens
}

/// Rewraps every token of a raw search string in double quotes.
///
/// This biases the upstream search toward exact-phrase matching per token:
/// `elephant "moby dick"` becomes `"elephant" "moby dick"`.
pub fn build_search_query(raw: &str) -> String {
    tokenize_query(raw)
        .iter()
        .map(|t| format!("\"{}\"", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the path-and-query portion of a search URL for the given page.
///
/// The page number is clamped to at least 1. The query is lowercased
/// before quoting and encoding, matching the site's search behavior.
pub fn build_search_path(raw_query: &str, page: u32) -> String {
    let page = page.max(1);
    let quoted = build_search_query(&raw_query.to_lowercase());
    let encoded = urlencoding::encode(&quoted);
    format!("/page/{}/?s={}&cat=undefined%2Cundefined", page, encoded)
}

/// Builds the full search URL for a query and page number.
///
/// # Example
/// ```
/// use audiobookbay_core::url::build_search_url;
/// let url = build_search_url("dune", 1);
/// assert_eq!(
///     url,
///     "https://audiobookbay.lu/page/1/?s=%22dune%22&cat=undefined%2Cundefined"
/// );
/// ```
pub fn build_search_url(raw_query: &str, page: u32) -> String {
    format!("{}{}", BASE_URL, build_search_path(raw_query, page))
}

/// Resolves a listing href to an absolute URL.
///
/// Absolute URLs pass through unchanged; relative paths are qualified
/// against [`BASE_URL`], inserting a slash when the path lacks one.
pub fn resolve_listing_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", BASE_URL, href)
    } else {
        format!("{}/{}", BASE_URL, href)
    }
}
