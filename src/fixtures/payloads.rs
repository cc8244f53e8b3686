// fixtures/payloads.rs
//
// Real-shaped OMDb bodies: a successful search page (including one entry
// with the "N/A" poster sentinel), the not-found and rejected-key
// failures, and a lookup response pair.

use super::CannedPayload;

/// Search page for `s=batman`: three summaries, one without a poster
pub struct BatmanSearchPage;

impl CannedPayload for BatmanSearchPage {
    fn json() -> &'static str {
        r#"{
            "Search": [
                {
                    "Title": "Batman Begins",
                    "Year": "2005",
                    "imdbID": "tt0372784",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/batman-begins.jpg"
                },
                {
                    "Title": "The Batman",
                    "Year": "2022",
                    "imdbID": "tt1877830",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/the-batman.jpg"
                },
                {
                    "Title": "Batman: The Lost Serial",
                    "Year": "1943",
                    "imdbID": "tt9999999",
                    "Type": "movie",
                    "Poster": "N/A"
                }
            ],
            "totalResults": "3",
            "Response": "True"
        }"#
    }
}

/// Search failure for a query with no matches
pub struct MovieNotFound;

impl CannedPayload for MovieNotFound {
    fn json() -> &'static str {
        r#"{"Response":"False","Error":"Movie not found!"}"#
    }
}

/// Rejection issued when the credential is missing or wrong
pub struct InvalidApiKey;

impl CannedPayload for InvalidApiKey {
    fn json() -> &'static str {
        r#"{"Response":"False","Error":"Invalid API key!"}"#
    }
}

/// Lookup response for `i=tt0372784`
pub struct BatmanBeginsDetail;

impl CannedPayload for BatmanBeginsDetail {
    fn json() -> &'static str {
        r#"{
            "Title": "Batman Begins",
            "Year": "2005",
            "Rated": "PG-13",
            "Released": "15 Jun 2005",
            "Runtime": "140 min",
            "Genre": "Action, Crime, Drama",
            "Director": "Christopher Nolan",
            "Writer": "Bob Kane, David S. Goyer, Christopher Nolan",
            "Actors": "Christian Bale, Michael Caine, Ken Watanabe",
            "Plot": "After witnessing his parents' death, Bruce learns the art of fighting to confront injustice.",
            "Language": "English, Mandarin",
            "Country": "United States, United Kingdom",
            "Poster": "https://m.media-amazon.com/images/M/batman-begins.jpg",
            "imdbRating": "8.2",
            "imdbVotes": "1,617,241",
            "imdbID": "tt0372784",
            "Type": "movie",
            "Response": "True"
        }"#
    }
}

/// Lookup failure for an identifier OMDb does not recognize
pub struct IncorrectImdbId;

impl CannedPayload for IncorrectImdbId {
    fn json() -> &'static str {
        r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#
    }
}
