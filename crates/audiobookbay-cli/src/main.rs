//! Interactive terminal client for searching audiobookbay.
//!
//! Prompts for a search term, pages through listings, and prints the
//! magnet URI for a selected audiobook.

mod prompt;
mod session;
mod source;
mod theme;

use audiobookbay_core::AudiobookbayScraper;
use tracing_subscriber::EnvFilter;

use crate::prompt::TerminalPrompter;
use crate::session::Session;
use crate::theme::Theme;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Unexpected failures are logged; the process still exits cleanly.
    if let Err(err) = run().await {
        tracing::error!(error = %err, "session ended unexpectedly");
        eprintln!("An error occurred: {err}");
    }
}

async fn run() -> anyhow::Result<()> {
    let scraper = AudiobookbayScraper::new()?;
    let mut session = Session::new(
        scraper,
        TerminalPrompter,
        Theme::default(),
        std::io::stdout(),
    );
    session.run().await
}
