use calypso_model::SearchMode;

/// Base URL of the search backend
pub const BACKEND_BASE_URL: &str = "http://127.0.0.1:8000";

/// Maximum number of results requested from the backend
pub fn max_results(mode: SearchMode) -> usize {
    match mode {
        SearchMode::Discovery => 6,
        SearchMode::Library => 20,
    }
}

macro_rules! backend_uri {
    ($e:expr) => (format!("{}/{}", $crate::settings::BACKEND_BASE_URL, $e));
    ($fmt:literal $(, $e:expr)*) => (format!(concat!("{}/", $fmt), $crate::settings::BACKEND_BASE_URL $(, $e)*));
}
pub(crate) use backend_uri;
