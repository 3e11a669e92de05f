//! Data model and interaction state for the Calypso book search
//!
//! Everything here is browser-free on purpose: the web crate owns the
//! rendering and the network call, this crate owns the shapes going over
//! the wire and the transitions of the search session.

mod book;
mod query;
mod state;

pub use book::{BookResult, SearchResponse};
pub use query::{QueryField, SearchMode, SearchQuery, SearchRequest};
pub use state::{Phase, SearchAction, SearchState};
