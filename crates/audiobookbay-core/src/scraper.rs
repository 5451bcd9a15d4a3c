//! Main scraper API for audiobookbay.
//!
//! Combines the HTTP client with the page parsers to provide the two
//! operations the interactive session needs: search a page of listings
//! and fetch one listing's details with a composed magnet URI.

use crate::client::{AudiobookbayClient, ClientConfig};
use crate::error::{AudiobookbayError, Result};
use crate::magnet::build_magnet_uri;
use crate::parser::{parse_details, parse_search_results};
use crate::types::{AudiobookDetails, SearchPage};
use crate::url::build_search_path;

/// Main scraper API for audiobookbay.
pub struct AudiobookbayScraper {
    client: AudiobookbayClient,
}

impl AudiobookbayScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = AudiobookbayClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = AudiobookbayClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Create a new scraper pointed at a custom origin (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = AudiobookbayClient::with_base_url(base_url, config)?;
        Ok(Self { client })
    }

    /// Search for audiobook listings
    ///
    /// # Arguments
    /// * `query` - Free-text search string; double-quoted phrases are kept
    ///   as single tokens
    /// * `page` - Results page number, clamped to >= 1
    ///
    /// # Returns
    /// One page of listings plus a has-next-page flag. A results page the
    /// parser cannot make sense of comes back as an empty page, not an
    /// error.
    ///
    /// # Errors
    /// - `InvalidQuery` if the query is empty or whitespace only
    /// - `Http` / `NotFound` / `RateLimited` if the fetch fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> audiobookbay_core::Result<()> {
    /// use audiobookbay_core::AudiobookbayScraper;
    /// let scraper = AudiobookbayScraper::new()?;
    /// let page = scraper.search("project hail mary", 1).await?;
    /// for listing in &page.results {
    ///     println!("{} ({})", listing.title, listing.size);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchPage> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AudiobookbayError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let path = build_search_path(trimmed, page);
        let html = self.client.fetch_page(&path).await?;
        Ok(parse_search_results(&html))
    }

    /// Fetch and parse one listing's detail page
    ///
    /// Recovers the info-hash (dedicated element first, document-order
    /// scan as fallback) and composes the magnet URI from it. A page with
    /// no recoverable hash yields details with `magnet_uri = None`.
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the listing's detail page
    ///
    /// # Errors
    /// - `InvalidQuery` if the URL is empty
    /// - `Http` / `NotFound` / `RateLimited` if the fetch fails
    pub async fn details(&self, url: &str) -> Result<AudiobookDetails> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(AudiobookbayError::InvalidQuery(
                "Listing URL cannot be empty".to_string(),
            ));
        }

        let html = self.client.fetch_url(trimmed).await?;
        let mut details = parse_details(&html);
        details.magnet_uri = details
            .info_hash
            .as_deref()
            .and_then(|hash| build_magnet_uri(hash, &details.title));
        Ok(details)
    }
}
