use crate::{BookResult, QueryField, SearchMode, SearchQuery};

/// Rendering phase of the search page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A request is in flight
    Searching,
    /// The last search returned at least one match
    Populated,
    /// The last search returned nothing, or failed
    Empty,
}

/// State transition of the search page
#[derive(Clone, Debug, PartialEq)]
pub enum SearchAction {
    /// Write a form field
    EditField(QueryField, String),
    /// Change the active mode, dropping input and results
    SwitchMode(SearchMode),
    /// A request with the given sequence number was issued
    BeginSearch { seq: u64 },
    /// The request with the given sequence number settled
    ///
    /// Failures settle with an empty list; they are not distinguishable
    /// from a zero-match response past this point.
    SettleSearch { seq: u64, results: Vec<BookResult> },
    /// Replace mode and input wholesale, typically from a restored location
    Restore { mode: SearchMode, query: SearchQuery },
}

/// Full interaction state of the search page
///
/// `results` always mirrors the last accepted response; it is dropped
/// wholesale on each new search and on mode switch, never merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub mode: SearchMode,
    pub query: SearchQuery,
    pub phase: Phase,
    pub results: Vec<BookResult>,
    /// Sequence number of the latest issued request; settles tagged with
    /// any other number are discarded
    pub last_seq: u64,
}

impl SearchState {
    /// Apply an action and return the next state
    pub fn apply(&self, action: SearchAction) -> SearchState {
        let mut next = self.clone();
        match action {
            SearchAction::EditField(field, value) => {
                next.query.set(field, value);
            }
            SearchAction::SwitchMode(mode) => {
                next.mode = mode;
                next.query = SearchQuery::default();
                next.results.clear();
                next.phase = Phase::Idle;
            }
            SearchAction::BeginSearch { seq } => {
                // Submitting with nothing to search for is a no-op.
                if next.query.is_blank() {
                    return next;
                }
                next.last_seq = seq;
                next.results.clear();
                next.phase = Phase::Searching;
            }
            SearchAction::SettleSearch { seq, results } => {
                // Accept only the latest issued request, and only while it
                // is still awaited: a mode switch orphans in-flight calls.
                if seq == next.last_seq && next.phase == Phase::Searching {
                    next.phase = if results.is_empty() {
                        Phase::Empty
                    } else {
                        Phase::Populated
                    };
                    next.results = results;
                }
            }
            SearchAction::Restore { mode, query } => {
                next.mode = mode;
                next.query = query;
                next.results.clear();
                next.phase = Phase::Idle;
            }
        }
        next
    }

    /// True while a request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Searching
    }
}
