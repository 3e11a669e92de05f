use gloo_net::http::Request;
use thiserror::Error;
use calypso_model::{BookResult, SearchRequest, SearchResponse};
use crate::Result;
use crate::settings;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP error ({0})")]
    HttpError(u16),
}

/// Issue search requests to the backend
///
/// The service holds no state and can be cloned freely; callers decide
/// what to do with failures (the page renders them as "no matches").
#[derive(Clone, Default)]
pub struct SearchService;

impl SearchService {
    /// POST the request and return the decoded result list
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<BookResult>> {
        let uri = settings::backend_uri!("search");
        let response = Request::post(&uri).json(request)?.send().await?;
        if response.ok() {
            let payload: SearchResponse = response.json().await?;
            Ok(payload.results)
        } else {
            Err(SearchError::HttpError(response.status()))?
        }
    }
}
