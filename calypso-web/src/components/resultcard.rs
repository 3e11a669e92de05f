use yew::prelude::*;
use calypso_model::{BookResult, SearchMode};

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub book: BookResult,
    pub mode: SearchMode,
}

/// Card for one book match
///
/// The match badge is only rendered in ranked mode; library-mode scores
/// carry the backend's lookup boosts and mean nothing to the reader.
#[function_component(ResultCard)]
pub fn result_card(props: &Props) -> Html {
    let Props { book, mode } = props;

    html! {
        <li class="result-card">
            <div class="result-cover">
                {
                    if let Some(thumbnail) = book.thumbnail_url() {
                        html! { <img src={thumbnail.to_owned()} alt={book.title.clone()} /> }
                    } else {
                        html! { <div class="result-cover-placeholder"></div> }
                    }
                }
                if mode.is_ranked() {
                    <span class="result-score">
                        { format!("{}% Match", book.match_percent()) }
                    </span>
                }
            </div>
            <div class="result-body">
                if !book.categories.is_empty() {
                    <span class="result-categories">{ book.categories.as_str() }</span>
                }
                <h3 class="result-title">{ book.title.as_str() }</h3>
                <p class="result-authors">{ book.authors.as_str() }</p>
                <p class="result-description">{ book.description.as_str() }</p>
                <div class="result-meta">
                    if let Some(rating) = book.rating {
                        <span class="result-rating">{ format!("{:.1} / 5", rating) }</span>
                    }
                    if let Some(readers) = book.readers_count() {
                        <span class="result-readers">{ format!("{} readers", readers) }</span>
                    }
                    if let Some(year) = book.display_year() {
                        <span class="result-year">{ year }</span>
                    }
                </div>
            </div>
        </li>
    }
}
