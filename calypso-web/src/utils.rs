use wasm_bindgen::{JsValue, UnwrapThrowExt};
use web_sys::UrlSearchParams;
use calypso_model::{SearchMode, SearchQuery};

/// Build an app URL carrying the given search state
pub fn build_app_url(mode: SearchMode, query: &SearchQuery) -> String {
    let mut url = format!("?m={}", mode.as_str());
    if !query.text.is_empty() {
        url.push_str(&format!("&q={}", js_sys::encode_uri_component(&query.text)));
    }
    if !query.author.is_empty() {
        url.push_str(&format!("&a={}", js_sys::encode_uri_component(&query.author)));
    }
    if !query.year.is_empty() {
        url.push_str(&format!("&y={}", js_sys::encode_uri_component(&query.year)));
    }
    url
}

/// Parse an app URL, using the current location
pub fn parse_app_url() -> (SearchMode, SearchQuery) {
    let window = web_sys::window().unwrap_throw();
    let search = window.location().search().unwrap_throw();
    let params = UrlSearchParams::new_with_str(&search).unwrap_throw();
    let mode = params
        .get("m")
        .and_then(|s| SearchMode::parse(&s))
        .unwrap_or_default();
    let query = SearchQuery {
        text: params.get("q").unwrap_or_default(),
        author: params.get("a").unwrap_or_default(),
        year: params.get("y").unwrap_or_default(),
    };
    (mode, query)
}

/// Push the given search state to the browser history
pub fn push_history(mode: SearchMode, query: &SearchQuery) -> Result<(), JsValue> {
    let url = build_app_url(mode, query);
    let window = web_sys::window().unwrap_throw();
    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(&url))
}
