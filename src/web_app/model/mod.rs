// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the OMDb wire format (PascalCase JSON keys) and are
// used for type-safe communication between frontend and backend.

use serde::{Deserialize, Serialize};

/// OMDb's marker for an unavailable field (poster, rating, ...).
pub const NOT_AVAILABLE: &str = "N/A";

/// One entry returned by a catalog search query (`s=` request)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl MovieSummary {
    /// Poster URL, or `None` when OMDb reports the sentinel value.
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }
}

/// Envelope for a search response
///
/// On failure OMDb omits the `Search` array entirely and sets
/// `Response: "False"` with an `Error` message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

/// The expanded record for a single catalog entry (`i=` request)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

impl MovieDetail {
    /// Poster URL, or `None` when OMDb reports the sentinel value.
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }

    /// Numeric rating on the 0-10 scale; `None` for `"N/A"` or unparsable.
    pub fn rating(&self) -> Option<f64> {
        if self.imdb_rating == NOT_AVAILABLE {
            return None;
        }
        self.imdb_rating.parse().ok()
    }

    /// Cast members split out of OMDb's comma-separated `Actors` field.
    pub fn actor_list(&self) -> Vec<&str> {
        if self.actors.is_empty() || self.actors == NOT_AVAILABLE {
            return Vec::new();
        }
        self.actors
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }
}

/// Minimal probe for the `Response`/`Error` pair present in every OMDb body
///
/// Lookup responses carry no envelope, so the body is probed with this shape
/// before being decoded as a [`MovieDetail`].
#[derive(Clone, Debug, Deserialize)]
pub struct ApiStatus {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl ApiStatus {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

/// Poster URL, or `None` for the sentinel / empty values
pub fn poster_url(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw == NOT_AVAILABLE {
        None
    } else {
        Some(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(poster: &str) -> MovieSummary {
        MovieSummary {
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            imdb_id: "tt0372784".to_string(),
            kind: "movie".to_string(),
            poster: poster.to_string(),
        }
    }

    #[test]
    fn test_poster_url_sentinel() {
        assert_eq!(summary("N/A").poster_url(), None);
        assert_eq!(summary("").poster_url(), None);
        assert_eq!(
            summary("https://m.media-amazon.com/poster.jpg").poster_url(),
            Some("https://m.media-amazon.com/poster.jpg")
        );
    }

    #[test]
    fn test_search_response_success_flag() {
        let ok = SearchResponse {
            search: vec![summary("N/A")],
            total_results: Some("1".to_string()),
            response: "True".to_string(),
            error: None,
        };
        assert!(ok.is_success());

        let failed = SearchResponse {
            search: vec![],
            total_results: None,
            response: "False".to_string(),
            error: Some("Movie not found!".to_string()),
        };
        assert!(!failed.is_success());
    }

    #[test]
    fn test_search_response_missing_array_parses_empty() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.search.is_empty());
        assert!(!parsed.is_success());
        assert_eq!(parsed.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn test_detail_rating_parsing() {
        let mut detail = MovieDetail {
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            rated: Some("PG-13".to_string()),
            released: Some("15 Jun 2005".to_string()),
            runtime: Some("140 min".to_string()),
            genre: Some("Action, Crime, Drama".to_string()),
            director: "Christopher Nolan".to_string(),
            actors: "Christian Bale, Michael Caine, Ken Watanabe".to_string(),
            plot: "After witnessing his parents' death...".to_string(),
            poster: "N/A".to_string(),
            imdb_rating: "8.2".to_string(),
            imdb_id: "tt0372784".to_string(),
        };
        assert_eq!(detail.rating(), Some(8.2));

        detail.imdb_rating = "N/A".to_string();
        assert_eq!(detail.rating(), None);

        detail.imdb_rating = "not-a-number".to_string();
        assert_eq!(detail.rating(), None);
    }

    #[test]
    fn test_detail_actor_list() {
        let detail = MovieDetail {
            title: "T".to_string(),
            year: "2005".to_string(),
            rated: None,
            released: None,
            runtime: None,
            genre: None,
            director: "D".to_string(),
            actors: "Christian Bale, Michael Caine , Ken Watanabe".to_string(),
            plot: String::new(),
            poster: String::new(),
            imdb_rating: String::new(),
            imdb_id: "tt0372784".to_string(),
        };
        assert_eq!(
            detail.actor_list(),
            vec!["Christian Bale", "Michael Caine", "Ken Watanabe"]
        );

        let empty = MovieDetail {
            actors: "N/A".to_string(),
            ..detail.clone()
        };
        assert!(empty.actor_list().is_empty());
    }

    #[test]
    fn test_summary_roundtrip_uses_wire_names() {
        let movie = summary("https://img.example/poster.jpg");
        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.contains("\"Title\""));
        assert!(json.contains("\"imdbID\""));
        assert!(json.contains("\"Poster\""));

        let back: MovieSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }

    #[test]
    fn test_api_status_probe() {
        let json = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        let status: ApiStatus = serde_json::from_str(json).unwrap();
        assert!(!status.is_success());
        assert_eq!(status.error.as_deref(), Some("Incorrect IMDb ID."));

        let json = r#"{"Title":"Batman Begins","Response":"True"}"#;
        let status: ApiStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_success());
        assert!(status.error.is_none());
    }
}
