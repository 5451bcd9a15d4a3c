//! Error types for the audiobookbay scraper.

use thiserror::Error;

/// Error type for all audiobookbay scraper operations.
#[derive(Error, Debug)]
pub enum AudiobookbayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Search query was empty or otherwise unusable
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Page not found on the server
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Rate limited by server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,
}

/// Result type alias for audiobookbay operations.
pub type Result<T> = std::result::Result<T, AudiobookbayError>;
