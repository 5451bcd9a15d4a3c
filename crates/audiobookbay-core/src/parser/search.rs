//! Search results parser for audiobookbay.
//!
//! Parses HTML from a search results page into listing records plus a
//! has-next-page flag. This parser is deliberately lenient: anything it
//! cannot make sense of yields an empty page rather than an error, and
//! the caller surfaces that as "no results".

use scraper::{ElementRef, Html, Selector};

use crate::parser::labeled_or_unknown;
use crate::types::{SearchPage, SearchResult};
use crate::url::resolve_listing_url;

/// Listing containers on a results page.
const POST_SELECTOR: &str = "#content .post, #content article.post";

/// Title anchor inside a listing container.
const TITLE_SELECTOR: &str = ".postTitle h2 a";

/// Free-text block carrying `Label: value` metadata lines.
const CONTENT_SELECTOR: &str = ".postContent";

/// Pagination affordances that indicate a following page exists.
const NEXT_SELECTORS: [&str; 3] = [
    ".wp-pagenavi a.next",
    ".navigation a.next",
    r#"a[rel="next"]"#,
];

/// Parses a search results page.
///
/// Listings missing a title or a link are skipped silently; the site nests
/// non-listing elements in similar markup. A page with no listing
/// containers, or unparseable input, returns an empty [`SearchPage`].
pub fn parse_search_results(html: &str) -> SearchPage {
    let document = Html::parse_document(html);

    let Ok(post_selector) = Selector::parse(POST_SELECTOR) else {
        return SearchPage::default();
    };

    let mut results = Vec::new();
    for post in document.select(&post_selector) {
        if let Some(result) = parse_listing(&post) {
            results.push(result);
        }
    }

    SearchPage {
        results,
        has_next_page: has_next_link(&document),
    }
}

/// Parses a single listing container.
///
/// Returns `None` when the title anchor or its href is missing or empty.
fn parse_listing(post: &ElementRef) -> Option<SearchResult> {
    let title_selector = Selector::parse(TITLE_SELECTOR).ok()?;
    let anchor = post.select(&title_selector).next()?;

    let title = anchor.text().collect::<String>().trim().to_string();
    let href = anchor.value().attr("href")?.trim();
    if title.is_empty() || href.is_empty() {
        return None;
    }

    let content = Selector::parse(CONTENT_SELECTOR)
        .ok()
        .and_then(|sel| post.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    Some(SearchResult {
        title,
        url: resolve_listing_url(href),
        size: labeled_or_unknown(&content, "Size"),
        language: labeled_or_unknown(&content, "Language"),
        category: labeled_or_unknown(&content, "Category"),
        format: labeled_or_unknown(&content, "Format"),
    })
}

/// Checks pagination controls for a "next" affordance.
fn has_next_link(document: &Html) -> bool {
    NEXT_SELECTORS.iter().any(|raw| {
        Selector::parse(raw)
            .map(|sel| document.select(&sel).next().is_some())
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
    <html>
    <body>
    <div id="content">
        <div class="post">
            <div class="postTitle"><h2><a href="/abss/the-way-of-kings/">The Way of Kings</a></h2></div>
            <div class="postContent">
                Language: English
                Category: Fantasy
                Format: MP3
                Size: 1.64 GBs
            </div>
        </div>
        <div class="post">
            <div class="postTitle"><h2>No anchor here</h2></div>
            <div class="postContent">Size: 900 MBs</div>
        </div>
        <article class="post">
            <div class="postTitle"><h2><a href="https://audiobookbay.lu/abss/dune/">Dune</a></h2></div>
            <div class="postContent">
                Language: English
                Format: M4B
            </div>
        </article>
    </div>
    </body>
    </html>
    "#;

    #[test]
    fn test_skips_listing_without_title_anchor() {
        let page = parse_search_results(RESULTS_PAGE);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title, "The Way of Kings");
        assert_eq!(page.results[1].title, "Dune");
    }

    #[test]
    fn test_urls_are_absolute() {
        let page = parse_search_results(RESULTS_PAGE);
        for result in &page.results {
            assert!(result.url.starts_with("https://"), "got {}", result.url);
        }
        assert_eq!(
            page.results[0].url,
            "https://audiobookbay.lu/abss/the-way-of-kings/"
        );
        assert_eq!(page.results[1].url, "https://audiobookbay.lu/abss/dune/");
    }

    #[test]
    fn test_metadata_extraction_with_unknown_defaults() {
        let page = parse_search_results(RESULTS_PAGE);

        let first = &page.results[0];
        assert_eq!(first.language, "English");
        assert_eq!(first.category, "Fantasy");
        assert_eq!(first.format, "MP3");
        assert_eq!(first.size, "1.64 GBs");

        let second = &page.results[1];
        assert_eq!(second.category, "Unknown");
        assert_eq!(second.size, "Unknown");
        assert_eq!(second.format, "M4B");
    }

    #[test]
    fn test_empty_html_returns_empty_page() {
        let page = parse_search_results("");
        assert!(page.results.is_empty());
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let page = parse_search_results("<<<div @@@ <a href=>>>");
        assert!(page.results.is_empty());
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_zero_listing_containers_is_not_an_error() {
        let page = parse_search_results("<html><body><div id='content'></div></body></html>");
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_next_page_detected_from_wp_pagenavi() {
        let html = format!(
            "{}<div class='wp-pagenavi'><a class='next' href='/page/2/'>»</a></div>",
            RESULTS_PAGE
        );
        let page = parse_search_results(&html);
        assert!(page.has_next_page);
    }

    #[test]
    fn test_next_page_detected_from_rel_next() {
        let html = r#"<html><body><div id="content"></div><a rel="next" href="/page/2/">Next</a></body></html>"#;
        let page = parse_search_results(html);
        assert!(page.has_next_page);
    }

    #[test]
    fn test_no_next_link_means_no_next_page() {
        let page = parse_search_results(RESULTS_PAGE);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_duplicate_titles_are_kept() {
        let html = r#"
        <div id="content">
            <div class="post">
                <div class="postTitle"><h2><a href="/abss/dune-a/">Dune</a></h2></div>
            </div>
            <div class="post">
                <div class="postTitle"><h2><a href="/abss/dune-b/">Dune</a></h2></div>
            </div>
        </div>
        "#;
        let page = parse_search_results(html);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title, page.results[1].title);
        assert_ne!(page.results[0].url, page.results[1].url);
    }
}
