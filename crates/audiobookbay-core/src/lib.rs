//! Audiobookbay Scraper Core Library
//!
//! Provides an async API for searching audiobook listings on audiobookbay
//! and turning a selected listing into a magnet URI.
//!
//! # Overview
//!
//! This crate provides:
//! - Rate-limited HTTP client with browser-like headers
//! - HTML parsers for search results pages and listing detail pages
//! - Info-hash recovery with a document-order fallback scan
//! - Magnet URI composition against a fixed tracker list
//!
//! # Example
//!
//! ```no_run
//! use audiobookbay_core::{AudiobookbayScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = AudiobookbayScraper::new()?;
//!
//!     // Search for listings (page 1)
//!     let page = scraper.search("project hail mary", 1).await?;
//!
//!     for listing in &page.results {
//!         println!("{} [{}]", listing.title, listing.size);
//!     }
//!
//!     // Fetch details and the synthesized magnet URI
//!     if let Some(listing) = page.results.first() {
//!         let details = scraper.details(&listing.url).await?;
//!         match details.magnet_uri {
//!             Some(uri) => println!("{}", uri),
//!             None => println!("No magnet link available"),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Hash recovery
//!
//! Detail pages usually render the info-hash into a dedicated element, but
//! the markup is not stable. When that element is missing, the parser falls
//! back to scanning every element in document order and takes the first
//! whose entire trimmed text is 40 hex characters. See
//! [`parser::details::find_info_hash`].

mod client;
mod error;
pub mod magnet;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{AudiobookbayClient, ClientConfig, RateLimiter};

// Re-export error types
pub use error::{AudiobookbayError, Result};

// Re-export parser functions
pub use parser::{parse_details, parse_search_results};

// Re-export main scraper API
pub use scraper::AudiobookbayScraper;

// Re-export data types
pub use types::{AudiobookDetails, SearchPage, SearchResult, UNKNOWN};

// Re-export URL helper functions for convenience
pub use url::{build_search_query, build_search_url, resolve_listing_url, tokenize_query};

// Re-export the magnet composer
pub use magnet::{TRACKERS, build_magnet_uri};
