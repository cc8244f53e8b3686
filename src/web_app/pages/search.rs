// web_app/pages/search.rs - Search page component
//
// The main search page that composes the search bar, the results grid,
// and the detail overlay, and manages the search state lifecycle.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::MovieDetail;
use crate::web_app::server_fns::{get_movie, search_movies};

/// Main search page component
///
/// Orchestrates the search experience with:
/// - Search bar (explicit submit)
/// - Results grid with empty state
/// - Detail overlay fetched by identifier
#[component]
pub fn SearchPage() -> impl IntoView {
    // Search state
    let query = RwSignal::new(String::new());

    // Trigger for manual search (when submitting the form)
    let search_trigger = RwSignal::new(0_u32);

    // Create resource for search results
    // Re-fetches when the query or trigger changes
    let search_results = Resource::new(
        move || (query.get(), search_trigger.get()),
        move |(q, _)| async move {
            if q.trim().is_empty() {
                // No request for an empty query
                Ok(Vec::new())
            } else {
                search_movies(q).await
            }
        },
    );

    // Failures have already been logged server-side; the browse view
    // renders them exactly like an empty result set.
    let movies = Signal::derive(move || {
        search_results
            .get()
            .and_then(|r: Result<_, ServerFnError>| r.ok())
            .unwrap_or_default()
    });

    // Detail overlay state: at most one selected movie at a time
    let selected_id = RwSignal::new(None::<String>);

    let detail = Resource::new(
        move || selected_id.get(),
        move |id| async move {
            match id {
                Some(id) => get_movie(id).await.map(Some),
                None => Ok(None),
            }
        },
    );

    let selected_movie = Signal::derive(move || {
        detail
            .get()
            .and_then(|r: Result<Option<MovieDetail>, ServerFnError>| r.ok())
            .flatten()
    });

    // Trigger search callback
    let on_search = Callback::new(move |()| {
        search_trigger.update(|t| *t += 1);
    });

    // Movie click handler (opens the detail overlay)
    let on_movie_click = Callback::new(move |id: String| {
        selected_id.set(Some(id));
    });

    // Close overlay handler
    let on_close = Callback::new(move |()| {
        selected_id.set(None);
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"🎬"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-amber-500 to-orange-600">
                            "Movie Zone"
                        </h1>
                    </div>
                    <div class="text-sm text-gray-500">
                        "A zone for movie lovers"
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Search bar section
                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                    <SearchBar
                        query=query
                        on_search=on_search
                    />
                </section>

                // Results section
                <Suspense fallback=move || view! {
                    <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                        <Loading message="Searching movies..." />
                    </div>
                }>
                    {move || {
                        match search_results.get() {
                            None => view! {
                                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                                    <Loading />
                                </div>
                            }.into_any(),
                            Some(_) => view! {
                                <div class="animate-fade-in">
                                    <MovieGrid
                                        movies=movies
                                        on_movie_click=on_movie_click
                                    />
                                </div>
                            }.into_any(),
                        }
                    }}
                </Suspense>
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Movie Zone. Built with Leptos and Actix, data by OMDb."</p>
                </div>
            </footer>

            // Movie detail overlay
            {move || {
                selected_movie.get().map(|movie| view! {
                    <ModalWrapper
                        title="Movie Details"
                        on_close=on_close
                    >
                        <MovieDetailView movie=movie />
                    </ModalWrapper>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_search_trigger_increment() {
        let mut search_trigger = 0u32;
        search_trigger += 1;
        assert_eq!(search_trigger, 1);

        search_trigger += 1;
        assert_eq!(search_trigger, 2);
    }

    #[test]
    fn test_empty_query_skips_request() {
        let query = String::new();
        let should_search = !query.trim().is_empty();
        assert!(!should_search);

        let query = "   ".to_string();
        let should_search = !query.trim().is_empty();
        assert!(!should_search);

        let query = "batman".to_string();
        let should_search = !query.trim().is_empty();
        assert!(should_search);
    }

    #[test]
    fn test_selected_movie_id_toggle() {
        // Selecting a card stores its identifier; dismissing clears it
        let mut selected_id: Option<String> = None;

        selected_id = Some("tt0372784".to_string());
        assert_eq!(selected_id.as_deref(), Some("tt0372784"));

        selected_id = None;
        assert!(selected_id.is_none());
    }

    #[test]
    fn test_failed_search_flattens_to_empty() {
        // The derived movies signal turns Err into an empty list
        let result: Result<Vec<String>, String> = Err("upstream down".to_string());
        let movies = result.ok().unwrap_or_default();
        assert!(movies.is_empty());
    }

    #[test]
    fn test_failed_lookup_keeps_overlay_closed() {
        // The derived selected_movie signal turns Err into None
        let result: Result<Option<&str>, String> = Err("lookup failed".to_string());
        let selected = result.ok().flatten();
        assert!(selected.is_none());
    }
}
