// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::{MovieDetail, MovieSummary};

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::omdb::OmdbClient, ServerFnError> {
    use crate::web_app::api::omdb;

    // First try to get from context (for testing or if manually set)
    if let Some(client) = use_context::<omdb::OmdbClient>() {
        return Ok(client);
    }

    // Global client initialized at startup (most reliable fallback)
    if let Some(client) = omdb::get_client() {
        return Ok(client);
    }

    // Last resort: build one straight from the environment
    omdb::OmdbClient::from_env().map_err(|e| ServerFnError::new(e.to_string()))
}

/// Search the movie catalog
///
/// Upstream failures are logged and collapse to an empty result list; the
/// browse view renders them as "no movies found".
#[server(SearchMovies, "/api")]
pub async fn search_movies(query: String) -> Result<Vec<MovieSummary>, ServerFnError> {
    let query = query.trim().to_string();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    tracing::info!("Search request: query='{}'", query);

    let client = client()?;
    match client.search(&query).await {
        Ok(movies) => {
            tracing::info!("Search successful: found {} results", movies.len());
            Ok(movies)
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Fetch the expanded record for one movie by identifier
#[server(GetMovie, "/api")]
pub async fn get_movie(imdb_id: String) -> Result<MovieDetail, ServerFnError> {
    tracing::info!("Detail request: imdb_id='{}'", imdb_id);

    let client = client()?;
    client.lookup(&imdb_id).await.map_err(|e| {
        tracing::error!("Detail lookup failed: {}", e);
        ServerFnError::new(format!("Lookup failed: {}", e))
    })
}
