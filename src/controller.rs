//! The search view-state machine.
//!
//! `SearchController` owns everything about the result area that changes over
//! time: whether a search has run, whether one is in flight, what came back,
//! and which record (if any) is open in the detail overlay. Renderers in
//! `present` and `overlay` only read from it.
//!
//! A search is split in two halves so that callers with their own event loop
//! can interleave requests:
//!
//! - `begin` moves to `Loading` and hands out a `Ticket` tagged with a fresh
//!   sequence number,
//! - `resolve` applies the backend's answer for a ticket, but only if that
//!   ticket is still the latest one issued. Older answers are dropped, so
//!   overlapping searches always end on the last request.
//!
//! `search` does both halves around a blocking backend call.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::backend::SearchBackend;
use crate::config::Config;
use crate::data::{PatentRecord, SearchRequest};
use crate::error::Error;
use crate::fixture::mock_patents;

pub const FETCH_FAILED_MSG: &str = "Failed to fetch patents. Please try again.";

/// What the result area currently shows. Exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// never searched
    Idle,
    Loading,
    Results(Vec<PatentRecord>),
    /// user-facing message; no results are shown alongside it
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    None,
    Selected(String),
}

/// What to display when the backend finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyResults {
    /// show the whole fixture set instead of an empty list
    ShowFixture,
    ShowEmpty,
}

impl Default for EmptyResults {
    fn default() -> Self {
        EmptyResults::ShowFixture
    }
}

impl FromStr for EmptyResults {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" | "all" => Ok(EmptyResults::ShowFixture),
            "empty" | "none" => Ok(EmptyResults::ShowEmpty),
            other => Err(format!("unknown empty-results policy {:?}, expected fixture or empty", other)),
        }
    }
}

impl fmt::Display for EmptyResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyResults::ShowFixture => f.write_str("fixture"),
            EmptyResults::ShowEmpty => f.write_str("empty"),
        }
    }
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub request: SearchRequest,
}

/// Outcome of `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// results applied (count as displayed, after any fallback)
    Displayed(usize),
    /// the backend found nothing and the fallback set is displayed
    FellBack(usize),
    Failed,
    /// a newer search was issued; this answer was ignored
    Stale,
}

#[derive(Debug)]
pub struct SearchController {
    state: ViewState,
    selection: Selection,
    has_searched: bool,
    seq: u64,
    empty_results: EmptyResults,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(EmptyResults::default())
    }
}

impl SearchController {
    pub fn new(empty_results: EmptyResults) -> Self {
        Self {
            state: ViewState::Idle,
            selection: Selection::None,
            has_searched: false,
            seq: 0,
            empty_results,
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self::new(config.empty_results)
    }

    /// Starts a search from any state.
    ///
    /// Clears the previous outcome and the overlay selection.
    pub fn begin(&mut self, request: SearchRequest) -> Ticket {
        self.seq += 1;
        self.has_searched = true;
        self.state = ViewState::Loading;
        self.selection = Selection::None;

        debug!(seq = self.seq, query = request.query(), "search started");
        Ticket { seq: self.seq, request }
    }

    pub fn resolve(&mut self, seq: u64, outcome: Result<Vec<PatentRecord>, Error>) -> Resolution {
        if seq != self.seq {
            warn!(seq, latest = self.seq, "dropping response to superseded search");
            return Resolution::Stale;
        }

        let resolution = match outcome {
            Ok(list) if list.is_empty() => match self.empty_results {
                EmptyResults::ShowFixture => {
                    let all = mock_patents().to_vec();
                    let n = all.len();
                    self.state = ViewState::Results(all);
                    Resolution::FellBack(n)
                },
                EmptyResults::ShowEmpty => {
                    self.state = ViewState::Results(Vec::new());
                    Resolution::Displayed(0)
                },
            },
            Ok(list) => {
                let n = list.len();
                self.state = ViewState::Results(list);
                Resolution::Displayed(n)
            },
            Err(err) => {
                warn!(seq, error = %err, "search failed");
                self.state = ViewState::Failed(FETCH_FAILED_MSG.to_owned());
                Resolution::Failed
            },
        };

        info!(seq, ?resolution, "search resolved");
        resolution
    }

    /// Runs one full search cycle against `backend`, blocking on the call.
    pub fn search<B: SearchBackend>(&mut self, backend: &B, request: SearchRequest) -> Resolution {
        let ticket = self.begin(request);
        let outcome = backend.search(&ticket.request);
        self.resolve(ticket.seq, outcome)
    }

    /// Opens the detail overlay for `id`. Allowed in any state.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selection = Selection::Selected(id.into());
    }

    pub fn close_overlay(&mut self) {
        self.selection = Selection::None;
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// records currently displayed; empty unless in `Results`
    pub fn results(&self) -> &[PatentRecord] {
        match &self.state {
            ViewState::Results(list) => list.as_slice(),
            ViewState::Idle | ViewState::Loading | ViewState::Failed(_) => &[][..],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == ViewState::Loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected record, looked up in the displayed results.
    pub fn selected_record(&self) -> Option<&PatentRecord> {
        match &self.selection {
            Selection::Selected(id) => self.results().iter().find(|p| &p.id == id),
            Selection::None => None,
        }
    }

    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    pub fn empty_results(&self) -> EmptyResults {
        self.empty_results
    }
}
