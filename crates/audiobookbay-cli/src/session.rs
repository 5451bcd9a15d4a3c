//! Interactive navigation loop.
//!
//! Drives search -> paginate -> select -> details as an explicit loop.
//! A failed fetch prints an error and leaves the page state exactly as it
//! was before the attempt.

use std::io::Write;

use anyhow::Result;

use crate::prompt::Prompter;
use crate::source::AudiobookSource;
use crate::theme::Theme;
use audiobookbay_core::{AudiobookDetails, SearchResult};

/// Where the user currently is in the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// The active search query
    pub query: String,
    /// Current results page, always >= 1
    pub page_number: u32,
    /// Whether the current page advertised a following page
    pub has_next_page: bool,
}

/// Outcome of interpreting one line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `0`: leave the session
    Exit,
    /// `n`/`N`, only when a next page exists
    NextPage,
    /// `p`/`P`, only when not on page 1
    PrevPage,
    /// 1-based listing index within the current page
    Select(usize),
    /// Anything else; the caller re-prompts without touching state
    Invalid,
}

/// What to do after a listing's details have been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Followup {
    Another,
    NewSearch,
    Exit,
}

/// Interprets one line of menu input against the current page.
///
/// Page-change keys are only honored when the move is possible; `n`
/// without a next page and `p` on page 1 are invalid choices, not no-ops.
pub fn parse_choice(input: &str, result_count: usize, state: &PageState) -> Choice {
    let trimmed = input.trim();

    if trimmed == "0" {
        return Choice::Exit;
    }
    if trimmed.eq_ignore_ascii_case("n") {
        return if state.has_next_page {
            Choice::NextPage
        } else {
            Choice::Invalid
        };
    }
    if trimmed.eq_ignore_ascii_case("p") {
        return if state.page_number > 1 {
            Choice::PrevPage
        } else {
            Choice::Invalid
        };
    }

    match trimmed.parse::<usize>() {
        Ok(index) if (1..=result_count).contains(&index) => Choice::Select(index),
        _ => Choice::Invalid,
    }
}

/// The interactive session: one source, one prompter, one output sink.
pub struct Session<S, P, W> {
    source: S,
    prompter: P,
    theme: Theme,
    out: W,
}

impl<S: AudiobookSource, P: Prompter, W: Write> Session<S, P, W> {
    pub fn new(source: S, prompter: P, theme: Theme, out: W) -> Self {
        Self {
            source,
            prompter,
            theme,
            out,
        }
    }

    /// Runs the session until the user exits.
    ///
    /// All fetch failures are reported and recovered from; this only
    /// returns an error for I/O problems on the prompt or output side.
    pub async fn run(&mut self) -> Result<()> {
        'search: loop {
            let raw = self.prompter.line("Enter search term (0 to exit)")?;
            let query = raw.trim().to_string();
            if query == "0" {
                break;
            }
            if query.is_empty() {
                writeln!(self.out, "Please enter a search term.")?;
                continue;
            }

            writeln!(self.out, "\nSearching for audiobooks...\n")?;
            let page = match self.source.search(&query, 1).await {
                Ok(page) => page,
                Err(err) => {
                    self.report_error(&err.to_string())?;
                    if self.prompter.confirm("Search again?")? {
                        continue 'search;
                    }
                    break 'search;
                }
            };

            if page.results.is_empty() {
                writeln!(
                    self.out,
                    "No results found. Please try a different search term."
                )?;
                if self.prompter.confirm("Search again?")? {
                    continue 'search;
                }
                break 'search;
            }

            let mut state = PageState {
                query,
                page_number: 1,
                has_next_page: page.has_next_page,
            };
            let mut results = page.results;
            self.print_results(&results, &state)?;

            loop {
                let input = self
                    .prompter
                    .line("Pick a listing (n/p to change page, 0 to exit)")?;

                match parse_choice(&input, results.len(), &state) {
                    Choice::Exit => break 'search,
                    Choice::NextPage => {
                        let target = state.page_number + 1;
                        if let Some(page) = self.change_page(&mut state, target).await? {
                            results = page;
                            self.print_results(&results, &state)?;
                        }
                    }
                    Choice::PrevPage => {
                        let target = state.page_number - 1;
                        if let Some(page) = self.change_page(&mut state, target).await? {
                            results = page;
                            self.print_results(&results, &state)?;
                        }
                    }
                    Choice::Select(index) => {
                        let listing = &results[index - 1];
                        writeln!(self.out, "\nFetching audiobook details...\n")?;
                        match self.source.details(&listing.url).await {
                            Ok(details) => self.print_details(&details)?,
                            Err(err) => self.report_error(&err.to_string())?,
                        }
                        match self.post_selection()? {
                            Followup::Another => self.print_results(&results, &state)?,
                            Followup::NewSearch => continue 'search,
                            Followup::Exit => break 'search,
                        }
                    }
                    Choice::Invalid => {
                        writeln!(
                            self.out,
                            "{}",
                            self.theme.error.apply_to("Invalid choice, try again.")
                        )?;
                    }
                }
            }
        }

        writeln!(self.out, "Goodbye.")?;
        Ok(())
    }

    /// Fetches another page of the current query.
    ///
    /// Updates the state only on success; on failure the error is printed
    /// and `None` is returned with the state untouched.
    async fn change_page(
        &mut self,
        state: &mut PageState,
        target: u32,
    ) -> Result<Option<Vec<SearchResult>>> {
        match self.source.search(&state.query, target).await {
            Ok(page) => {
                state.page_number = target;
                state.has_next_page = page.has_next_page;
                Ok(Some(page.results))
            }
            Err(err) => {
                self.report_error(&err.to_string())?;
                Ok(None)
            }
        }
    }

    /// Post-selection menu: another listing, a new search, or exit.
    fn post_selection(&mut self) -> Result<Followup> {
        loop {
            let input = self
                .prompter
                .line("Choose another (c), search again (s), or exit (0)")?;
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("c") {
                return Ok(Followup::Another);
            }
            if trimmed.eq_ignore_ascii_case("s") {
                return Ok(Followup::NewSearch);
            }
            if trimmed == "0" {
                return Ok(Followup::Exit);
            }
            writeln!(
                self.out,
                "{}",
                self.theme.error.apply_to("Invalid choice, try again.")
            )?;
        }
    }

    fn print_results(&mut self, results: &[SearchResult], state: &PageState) -> Result<()> {
        writeln!(
            self.out,
            "\n{}",
            self.theme.header.apply_to(format!(
                "Results for '{}' (page {})",
                state.query, state.page_number
            ))
        )?;

        for (i, result) in results.iter().enumerate() {
            writeln!(
                self.out,
                "{}. {}",
                self.theme.index.apply_to(i + 1),
                self.theme.title.apply_to(&result.title)
            )?;
            writeln!(
                self.out,
                "   {} {}",
                self.theme.label.apply_to("Language:"),
                result.language
            )?;
            writeln!(
                self.out,
                "   {} {}",
                self.theme.label.apply_to("Category:"),
                result.category
            )?;
            writeln!(
                self.out,
                "   {} {}",
                self.theme.label.apply_to("Format:"),
                result.format
            )?;
            writeln!(
                self.out,
                "   {} {}\n",
                self.theme.label.apply_to("Size:"),
                result.size
            )?;
        }

        if state.has_next_page {
            writeln!(self.out, "More results available: 'n' for the next page.")?;
        }
        if state.page_number > 1 {
            writeln!(self.out, "'p' goes back to page {}.", state.page_number - 1)?;
        }

        Ok(())
    }

    fn print_details(&mut self, details: &AudiobookDetails) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            self.theme.header.apply_to("Audiobook Details")
        )?;
        writeln!(self.out, "-------------------")?;
        writeln!(
            self.out,
            "{} {}",
            self.theme.label.apply_to("Title:"),
            self.theme.title.apply_to(&details.title)
        )?;
        writeln!(
            self.out,
            "{} {}",
            self.theme.label.apply_to("Author:"),
            details.author
        )?;
        writeln!(
            self.out,
            "{} {}",
            self.theme.label.apply_to("Narrator:"),
            details.narrator
        )?;
        writeln!(
            self.out,
            "{} {}",
            self.theme.label.apply_to("Format:"),
            details.format
        )?;
        writeln!(
            self.out,
            "{} {}",
            self.theme.label.apply_to("Bitrate:"),
            details.bitrate
        )?;

        match &details.magnet_uri {
            Some(uri) => {
                writeln!(self.out, "\nMagnet Link:")?;
                writeln!(self.out, "{}", self.theme.magnet.apply_to(uri))?;
            }
            None => {
                writeln!(
                    self.out,
                    "\nNo magnet link available for this audiobook."
                )?;
            }
        }

        Ok(())
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        tracing::warn!(message, "fetch failed");
        writeln!(self.out, "{}", self.theme.error.apply_to(message))?;
        Ok(())
    }
}
