//! Terminal styling for the interactive session.
//!
//! The theme is passed into the session at construction instead of living
//! in a process-wide style table, so tests can run with plain output.

use console::Style;

/// Styles applied to session output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page headers ("Results for ...")
    pub header: Style,
    /// Listing indices
    pub index: Style,
    /// Listing and detail titles
    pub title: Style,
    /// Metadata labels (Language, Size, ...)
    pub label: Style,
    /// Error messages
    pub error: Style,
    /// The magnet URI itself
    pub magnet: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            index: Style::new().yellow(),
            title: Style::new().bold(),
            label: Style::new().dim(),
            error: Style::new().red(),
            magnet: Style::new().green(),
        }
    }
}

impl Theme {
    /// A theme with no styling at all, for tests and dumb terminals.
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            index: Style::new(),
            title: Style::new(),
            label: Style::new(),
            error: Style::new(),
            magnet: Style::new(),
        }
    }
}
