use serde::{Deserialize, Serialize};

/// Search variant selected by the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Free-text, relevance-ranked search
    #[default]
    Discovery,
    /// Structured lookup by title, author and year
    Library,
}

impl SearchMode {
    /// Every mode, in display order
    pub const ALL: [SearchMode; 2] = [SearchMode::Discovery, SearchMode::Library];

    /// Wire name, also used as URL parameter value
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Discovery => "discovery",
            SearchMode::Library => "library",
        }
    }

    /// Parse a wire name back into a mode
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "discovery" => Some(SearchMode::Discovery),
            "library" => Some(SearchMode::Library),
            _ => None,
        }
    }

    /// True if backend scores are meaningful for this mode
    pub fn is_ranked(self) -> bool {
        matches!(self, SearchMode::Discovery)
    }

    /// Label shown on the mode switch
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Discovery => "Discovery",
            SearchMode::Library => "Library",
        }
    }
}

/// Editable field of the search form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryField {
    Text,
    Author,
    Year,
}

/// Current form input
///
/// Free-form text, no validation; the backend interprets it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub author: String,
    pub year: String,
}

impl SearchQuery {
    /// True when every field is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
            && self.author.trim().is_empty()
            && self.year.trim().is_empty()
    }

    /// Write a single field
    pub fn set(&mut self, field: QueryField, value: String) {
        match field {
            QueryField::Text => self.text = value,
            QueryField::Author => self.author = value,
            QueryField::Year => self.year = value,
        }
    }
}

/// JSON body of a `POST /search` request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub author_filter: String,
    pub year_filter: String,
    pub mode: SearchMode,
    pub top_k: usize,
}

impl SearchRequest {
    /// Build a request from the current form input
    pub fn from_query(mode: SearchMode, query: &SearchQuery, top_k: usize) -> Self {
        Self {
            query: query.text.trim().to_owned(),
            author_filter: query.author.trim().to_owned(),
            year_filter: query.year.trim().to_owned(),
            mode,
            top_k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_detection() {
        assert!(SearchQuery::default().is_blank());

        let query = SearchQuery {
            text: " \t ".into(),
            author: String::new(),
            year: "  ".into(),
        };
        assert!(query.is_blank());

        let query = SearchQuery {
            author: "Tolkien".into(),
            ..Default::default()
        };
        assert!(!query.is_blank());
    }

    #[test]
    fn field_writes() {
        let mut query = SearchQuery::default();
        query.set(QueryField::Text, "a robot finds home".into());
        query.set(QueryField::Year, "2016".into());
        assert_eq!(query.text, "a robot finds home");
        assert_eq!(query.author, "");
        assert_eq!(query.year, "2016");
    }

    #[test]
    fn mode_names_roundtrip() {
        for mode in SearchMode::ALL {
            assert_eq!(SearchMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(SearchMode::parse("semantic"), None);
    }

    #[test]
    fn library_request_body() {
        // Author/year lookup with a blank main query must still carry the
        // empty query string on the wire.
        let query = SearchQuery {
            text: String::new(),
            author: "Tolkien".into(),
            year: "1954".into(),
        };
        let request = SearchRequest::from_query(SearchMode::Library, &query, 20);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["mode"], "library");
        assert_eq!(body["query"], "");
        assert_eq!(body["author_filter"], "Tolkien");
        assert_eq!(body["year_filter"], "1954");
        assert_eq!(body["top_k"], 20);
    }

    #[test]
    fn request_trims_input() {
        let query = SearchQuery {
            text: "  a story about a lost robot  ".into(),
            ..Default::default()
        };
        let request = SearchRequest::from_query(SearchMode::Discovery, &query, 6);
        assert_eq!(request.query, "a story about a lost robot");
        assert_eq!(request.mode, SearchMode::Discovery);
        assert_eq!(request.top_k, 6);
    }
}
