pub use searchform::SearchForm;
pub use resultcard::ResultCard;

mod searchform {
    use yew::prelude::*;
    use web_sys::HtmlInputElement;
    use wasm_bindgen::{JsCast, UnwrapThrowExt};
    use calypso_model::{QueryField, SearchAction, SearchMode, SearchQuery};

    #[derive(Clone, PartialEq, Properties)]
    pub struct Props {
        pub mode: SearchMode,
        pub query: SearchQuery,
        pub loading: bool,
        /// Send back actions to the app
        pub dispatch: Callback<SearchAction>,
        pub on_submit: Callback<()>,
    }

    /// The unified search form: a mode switch plus per-mode input fields
    #[function_component(SearchForm)]
    pub fn search_form(props: &Props) -> Html {
        let Props { mode, query, loading, dispatch, on_submit } = props.clone();

        let onsubmit = move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        };

        let edit = |field: QueryField| {
            let dispatch = dispatch.clone();
            Callback::from(move |e: InputEvent| {
                let target = e.target().unwrap_throw();
                let target: HtmlInputElement = target.dyn_into().unwrap_throw();
                dispatch.emit(SearchAction::EditField(field, target.value()));
            })
        };

        html! {
            <form id="search" {onsubmit}>
                <div id="mode-switch">
                    { for SearchMode::ALL.iter().map(|m| {
                        let m = *m;
                        let onclick = dispatch.reform(move |_| SearchAction::SwitchMode(m));
                        let class = (m == mode).then_some("active");
                        html! {
                            <button type="button" class={classes!(class)} {onclick}>
                                { m.label() }
                            </button>
                        }
                    }) }
                </div>
                {
                    match mode {
                        SearchMode::Discovery => html! {
                            <input type="search"
                                placeholder="e.g. a story about a lost robot finding home"
                                value={query.text.clone()}
                                oninput={edit(QueryField::Text)} />
                        },
                        SearchMode::Library => html! {
                            <>
                                <input type="search"
                                    placeholder="Title or keywords"
                                    value={query.text.clone()}
                                    oninput={edit(QueryField::Text)} />
                                <input type="search"
                                    placeholder="Author"
                                    value={query.author.clone()}
                                    oninput={edit(QueryField::Author)} />
                                <input type="search"
                                    placeholder="Year"
                                    value={query.year.clone()}
                                    oninput={edit(QueryField::Year)} />
                            </>
                        },
                    }
                }
                <button type="submit" disabled={loading}>
                    { if loading { "Searching" } else { "Search" } }
                </button>
            </form>
        }
    }
}

mod resultcard;
