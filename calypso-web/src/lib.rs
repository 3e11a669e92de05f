#![recursion_limit = "256"]
pub mod settings;
mod services;
mod components;
mod hooks;
mod utils;

use std::rc::Rc;
use gloo_console::info;
use yew::prelude::*;
use wasm_bindgen::{
    JsCast,
    UnwrapThrowExt,
    closure::Closure,
};
use calypso_model::{Phase, SearchAction, SearchState};

use components::{ResultCard, SearchForm};
use hooks::use_search;
use utils::*;

type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;

/// Reducer wrapper around the page state
///
/// Transitions live in `calypso_model`; this only adapts them to yew.
#[derive(Clone, Default, PartialEq)]
pub struct AppState(pub SearchState);

impl Reducible for AppState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: SearchAction) -> Rc<Self> {
        AppState(self.0.apply(action)).into()
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    let dispatch = Callback::from({
        let state = state.clone();
        move |action| state.dispatch(action)
    });

    let search = use_search(dispatch.clone());

    let on_submit = Callback::from({
        let state = state.clone();
        let search = search.clone();
        move |()| {
            let current = &state.0;
            if current.query.is_blank() {
                return;
            }
            info!(format!("search ({}): {:?}", current.mode.as_str(), current.query));
            push_history(current.mode, &current.query).unwrap_throw();
            search.run(current.mode, current.query.clone());
        }
    });

    // Restore search state from the URL, re-running the restored search
    let load_location = Callback::from({
        let dispatch = dispatch.clone();
        let search = search.clone();
        move |()| {
            let (mode, query) = parse_app_url();
            let blank = query.is_blank();
            dispatch.emit(SearchAction::Restore { mode, query: query.clone() });
            if !blank {
                search.run(mode, query);
            }
        }
    });

    // Load the location on startup, then follow history moves
    use_effect_with((), {
        let load_location = load_location.clone();
        move |_| {
            load_location.emit(());
            let window = web_sys::window().unwrap_throw();
            let listener: Closure<dyn FnMut()> = Closure::new(move || load_location.emit(()));
            window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()).unwrap_throw();

            move || drop(listener)
        }
    });

    let s = &state.0;
    html! {
        <div id="calypso">
            <header id="masthead">
                <h1>{ "Calypso" }</h1>
                <p id="tagline">{ "Stories concealed in the deep, waiting to be found." }</p>
            </header>
            <SearchForm
                mode={s.mode}
                query={s.query.clone()}
                loading={s.is_loading()}
                dispatch={dispatch}
                {on_submit} />
            <div id="search-content">
            {
                match s.phase {
                    Phase::Idle => html! {},
                    Phase::Searching => html_searching(),
                    Phase::Populated => html! {
                        <>
                            { html_result_count(s) }
                            <ul id="results">
                                { for s.results.iter().map(|book| html! {
                                    <ResultCard key={book.id.clone()} book={book.clone()} mode={s.mode} />
                                }) }
                            </ul>
                        </>
                    },
                    Phase::Empty => html_empty_state(),
                }
            }
            </div>
        </div>
    }
}

/// Return the result count displayed above the result list
fn html_result_count(state: &SearchState) -> Html {
    let nresults = state.results.len();
    let mut count = format!("{}", nresults);
    // The backend truncates to the hint, so an exact hit implies more
    if nresults >= settings::max_results(state.mode) {
        count.push('+');
    }
    html! {
        <div id="result-count"><b>{ count }</b>{ " matches" }</div>
    }
}

/// Placeholder shown while a request is in flight
fn html_searching() -> Html {
    html! {
        <div id="searching"><p>{ "Searching the deep..." }</p></div>
    }
}

/// Panel shown when a search settles with nothing to show
fn html_empty_state() -> Html {
    html! {
        <div id="empty-state">
            <h3>{ "No matches found" }</h3>
            <p>{ "The ocean is vast, but this search came up empty." }</p>
        </div>
    }
}
