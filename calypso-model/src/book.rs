use serde::Deserialize;

/// One book match returned by the backend
///
/// Results are never created locally; they mirror the backend payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BookResult {
    /// Opaque identifier, used as the rendered list key
    pub id: String,
    pub title: String,
    pub authors: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: String,
    /// Cover image URL, absent or empty when the backend has none
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Relevance in [0, 1]; only meaningful for ranked modes
    pub score: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Readers count; the backend stores counts as floats
    #[serde(default)]
    pub readers: Option<f64>,
    /// Publication year as sent by the backend, `"0"` when unknown
    #[serde(default)]
    pub year: Option<String>,
}

impl BookResult {
    /// Relevance score as a percentage, for the match badge
    pub fn match_percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    /// Cover image URL, if there is one to show
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.is_empty())
    }

    /// Readers count as a whole number
    pub fn readers_count(&self) -> Option<u64> {
        self.readers.map(|r| r.round() as u64)
    }

    /// Publication year, if actually known
    pub fn display_year(&self) -> Option<&str> {
        self.year.as_deref().filter(|y| !y.is_empty() && *y != "0")
    }
}

/// JSON payload of a `POST /search` response
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<BookResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing() {
        let payload = r#"{
            "results": [{
                "id": "bk-42",
                "score": 0.87,
                "title": "The Wild Robot",
                "authors": "Peter Brown",
                "description": "A robot finds home on a remote island.",
                "categories": "Juvenile Fiction",
                "thumbnail": null,
                "rating": 4.2,
                "readers": 1250.0,
                "year": "2016"
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.results.len(), 1);

        let book = &response.results[0];
        assert_eq!(book.id, "bk-42");
        assert_eq!(book.thumbnail_url(), None);
        assert_eq!(book.rating, Some(4.2));
        assert_eq!(book.readers_count(), Some(1250));
        assert_eq!(book.display_year(), Some("2016"));
    }

    #[test]
    fn empty_thumbnail_is_suppressed() {
        let book = BookResult {
            thumbnail: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(book.thumbnail_url(), None);

        let book = BookResult {
            thumbnail: Some("https://example.com/cover.jpg".into()),
            ..Default::default()
        };
        assert_eq!(book.thumbnail_url(), Some("https://example.com/cover.jpg"));
    }

    #[test]
    fn response_parsing_minimal() {
        // Optional metadata may be missing entirely.
        let payload = r#"{
            "results": [{
                "id": "bk-1",
                "score": 0.5,
                "title": "Untitled",
                "authors": "Unknown"
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(payload).unwrap();
        let book = &response.results[0];
        assert_eq!(book.description, "");
        assert_eq!(book.categories, "");
        assert_eq!(book.thumbnail, None);
        assert_eq!(book.rating, None);
        assert_eq!(book.display_year(), None);
    }

    #[test]
    fn match_percent_rounds() {
        let book = BookResult {
            score: 0.87,
            ..Default::default()
        };
        assert_eq!(book.match_percent(), 87);

        let book = BookResult {
            score: 0.875,
            ..Default::default()
        };
        assert_eq!(book.match_percent(), 88);
    }

    #[test]
    fn match_percent_clamps_boosted_scores() {
        // Library-mode scores are boosted far above 1 by the backend; the
        // badge is not shown there, but keep the math sane anyway.
        let book = BookResult {
            score: 100.87,
            ..Default::default()
        };
        assert_eq!(book.match_percent(), 100);
    }

    #[test]
    fn unknown_year_is_suppressed() {
        let book = BookResult {
            year: Some("0".into()),
            ..Default::default()
        };
        assert_eq!(book.display_year(), None);

        let book = BookResult {
            year: Some("1954".into()),
            ..Default::default()
        };
        assert_eq!(book.display_year(), Some("1954"));
    }
}
