//! Seam between the navigation loop and the scraper.
//!
//! The session only talks to [`AudiobookSource`], which lets tests drive
//! it with canned pages instead of live HTTP.

use async_trait::async_trait;
use audiobookbay_core::{
    AudiobookDetails, AudiobookbayError, AudiobookbayScraper, SearchPage,
};

/// Async provider of search pages and listing details.
#[async_trait]
pub trait AudiobookSource {
    /// Fetch one page of search results for a query.
    async fn search(&self, query: &str, page: u32)
    -> Result<SearchPage, AudiobookbayError>;

    /// Fetch details (including any magnet URI) for a listing URL.
    async fn details(&self, url: &str) -> Result<AudiobookDetails, AudiobookbayError>;
}

#[async_trait]
impl AudiobookSource for AudiobookbayScraper {
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchPage, AudiobookbayError> {
        AudiobookbayScraper::search(self, query, page).await
    }

    async fn details(&self, url: &str) -> Result<AudiobookDetails, AudiobookbayError> {
        AudiobookbayScraper::details(self, url).await
    }
}
