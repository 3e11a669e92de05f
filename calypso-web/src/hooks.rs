use std::rc::Rc;
use gloo_console::error;
use yew::prelude::*;
use calypso_model::{SearchAction, SearchMode, SearchQuery, SearchRequest};
use crate::services::SearchService;
use crate::settings;

/// Handle returned by [`use_search`], used to issue backend searches
pub struct UseSearchHandle {
    run: Rc<dyn Fn(SearchMode, SearchQuery)>,
}

impl UseSearchHandle {
    pub fn run(&self, mode: SearchMode, query: SearchQuery) {
        (self.run)(mode, query)
    }
}

impl Clone for UseSearchHandle {
    fn clone(&self) -> Self {
        Self { run: self.run.clone() }
    }
}

/// Hook issuing sequence-tagged searches against the backend
///
/// Each submitted search gets the next number from a monotonic counter;
/// the reducer discards any settle that is not the latest issued, so
/// overlapping submissions cannot clobber each other. Blank input is
/// dropped here, before anything is dispatched or sent.
#[hook]
pub fn use_search(dispatch: Callback<SearchAction>) -> UseSearchHandle {
    use yew::platform::spawn_local;

    let seq = use_mut_ref(|| 0u64);
    let service = SearchService::default();

    let run = Rc::new(move |mode: SearchMode, query: SearchQuery| {
        if query.is_blank() {
            return;
        }
        let seq = {
            let mut seq = seq.borrow_mut();
            *seq += 1;
            *seq
        };
        dispatch.emit(SearchAction::BeginSearch { seq });

        let request = SearchRequest::from_query(mode, &query, settings::max_results(mode));
        let service = service.clone();
        let dispatch = dispatch.clone();
        spawn_local(async move {
            let results = match service.search(&request).await {
                Ok(results) => results,
                Err(e) => {
                    error!(format!("search request failed: {}", e));
                    Vec::new()
                }
            };
            dispatch.emit(SearchAction::SettleSearch { seq, results });
        });
    });
    UseSearchHandle { run }
}
