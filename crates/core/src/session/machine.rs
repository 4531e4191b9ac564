//! The search-and-select state machine.

use tracing::{debug, info, warn};

use crate::catalog::ReleaseCatalog;
use crate::filter::{sift, FilterSettings};
use crate::magnet::LinkDescriptor;
use crate::presenter::Presenter;

use super::input::{parse_search_term, parse_selection, parse_yes_no};
use super::{
    Clipboard, Console, FilterQuestion, ResultSink, SessionError, SessionOutcome, SessionState,
};

pub const SEARCH_PROMPT: &str = "Enter a search term: ";
pub const SELECTION_PROMPT: &str = "Enter the ID of the release you want: ";

/// One interactive search: term, filters, table, selection.
///
/// Every [`step`](Session::step) performs at most one blocking read. Invalid
/// input leaves the session in the same state. Once a step returns an error
/// the session should be discarded.
pub struct Session<'a> {
    catalog: &'a dyn ReleaseCatalog,
    console: &'a dyn Console,
    sink: &'a dyn ResultSink,
    clipboard: &'a dyn Clipboard,
    presenter: Presenter,
    minimal_filters: bool,
    state: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(
        catalog: &'a dyn ReleaseCatalog,
        console: &'a dyn Console,
        sink: &'a dyn ResultSink,
        clipboard: &'a dyn Clipboard,
    ) -> Self {
        Self {
            catalog,
            console,
            sink,
            clipboard,
            presenter: Presenter::default(),
            minimal_filters: false,
            state: SessionState::AwaitingSearchTerm,
        }
    }

    pub fn with_presenter(mut self, presenter: Presenter) -> Self {
        self.presenter = presenter;
        self
    }

    /// Skip the filter questions and use permissive settings.
    pub fn with_minimal_filters(mut self, minimal: bool) -> Self {
        self.minimal_filters = minimal;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drive the session until it is done.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        loop {
            if let SessionState::Done(outcome) = &self.state {
                return Ok(outcome.clone());
            }
            self.step()?;
        }
    }

    /// Advance by one transition. A no-op once done.
    ///
    /// A fatal error moves the session to [`SessionState::Failed`]; every
    /// later step returns [`SessionError::Aborted`] without touching any
    /// collaborator.
    pub fn step(&mut self) -> Result<(), SessionError> {
        if let SessionState::Failed { reason } = &self.state {
            return Err(SessionError::Aborted(reason.clone()));
        }

        let state = std::mem::replace(&mut self.state, SessionState::AwaitingSearchTerm);
        let from = state.name();
        match self.transition(state) {
            Ok(next) => {
                if next.name() != from {
                    debug!(from, to = next.name(), "Session transition");
                }
                self.state = next;
                Ok(())
            }
            Err(e) => {
                warn!(from, error = %e, "Session failed");
                self.state = SessionState::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    fn transition(&self, state: SessionState) -> Result<SessionState, SessionError> {
        match state {
            SessionState::AwaitingSearchTerm => {
                let input = self.read(SEARCH_PROMPT)?;
                Ok(match parse_search_term(&input) {
                    Some(term) => SessionState::Searching { term },
                    None => {
                        self.console.say("Search term cannot be empty.");
                        SessionState::AwaitingSearchTerm
                    }
                })
            }

            SessionState::Searching { term } => {
                let rows = self.catalog.search(&term)?;
                info!(term = %term, rows = rows.len(), "Catalog search complete");

                Ok(if self.minimal_filters {
                    SessionState::Filtering {
                        term,
                        rows,
                        settings: FilterSettings::permissive(),
                    }
                } else {
                    SessionState::AwaitingFilterInput {
                        term,
                        rows,
                        question: FilterQuestion::OnlyUltraHd,
                        settings: FilterSettings::restrictive(),
                    }
                })
            }

            SessionState::AwaitingFilterInput {
                term,
                rows,
                question,
                mut settings,
            } => {
                let input = self.read(question.prompt())?;
                let Some(answer) = parse_yes_no(&input) else {
                    self.console.say("Please answer y or n.");
                    return Ok(SessionState::AwaitingFilterInput {
                        term,
                        rows,
                        question,
                        settings,
                    });
                };

                Ok(match question.answer(&mut settings, answer) {
                    Some(next) => SessionState::AwaitingFilterInput {
                        term,
                        rows,
                        question: next,
                        settings,
                    },
                    None => SessionState::Filtering {
                        term,
                        rows,
                        settings,
                    },
                })
            }

            SessionState::Filtering {
                term,
                rows,
                settings,
            } => {
                let results = sift(&rows, settings);
                info!(kept = results.len(), of = rows.len(), "Filtered search results");

                if results.is_empty() {
                    self.console
                        .say(&format!("No results found for \"{}\".", term));
                    return Ok(SessionState::Done(SessionOutcome::NoResults { term }));
                }
                Ok(SessionState::Presenting { results })
            }

            SessionState::Presenting { results } => {
                let presentation = self.presenter.present(&results);
                self.sink.render_table(&presentation.rows);
                if let Err(e) = self.sink.write_report(&presentation.report) {
                    warn!("Report write failed: {}", e);
                    self.console
                        .say("Could not write the report file, the table above is still usable.");
                }
                Ok(SessionState::AwaitingSelection { results })
            }

            SessionState::AwaitingSelection { results } => {
                let input = self.read(SELECTION_PROMPT)?;
                let record = match parse_selection(&input, &results) {
                    Ok(record) => record.clone(),
                    Err(e) => {
                        self.console.say(&e.to_string());
                        return Ok(SessionState::AwaitingSelection { results });
                    }
                };

                let link = LinkDescriptor::from(&record).to_link();
                info!(id = record.id, title = %record.title, "Release selected");
                self.console.say(&format!("Magnet link:\n{}", link));

                let copied = match self.clipboard.copy(&link) {
                    Ok(()) => {
                        self.console.say("Copied to clipboard.");
                        true
                    }
                    Err(e) => {
                        warn!("Clipboard hand-off failed: {}", e);
                        self.console
                            .say("Clipboard not available, use the link shown above.");
                        false
                    }
                };

                Ok(SessionState::Done(SessionOutcome::Selected {
                    record,
                    link,
                    copied,
                }))
            }

            terminal @ (SessionState::Done(_) | SessionState::Failed { .. }) => Ok(terminal),
        }
    }

    fn read(&self, prompt: &str) -> Result<String, SessionError> {
        self.console
            .read_line(prompt)
            .map_err(SessionError::Input)?
            .ok_or(SessionError::InputClosed)
    }
}
