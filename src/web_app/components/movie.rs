// web_app/components/movie.rs - Movie display components
//
// Components for displaying movies including:
// - MovieCard: Grid card for search results
// - MovieDetailView: Full movie detail view
// - MovieGrid: Grid layout with empty state

use leptos::prelude::*;

use super::common::StarRating;
use crate::web_app::model::{MovieDetail, MovieSummary};

/// Image served when OMDb reports the poster as unavailable
pub const FALLBACK_POSTER: &str = "/poster-fallback.svg";

/// Resolve a raw poster field to something an `<img>` can render
pub fn poster_src(raw: &str) -> String {
    crate::web_app::model::poster_url(raw)
        .unwrap_or(FALLBACK_POSTER)
        .to_string()
}

/// Movie card for the search results grid
///
/// Displays a movie summary with click handler for details.
#[component]
pub fn MovieCard(
    /// The search result to display
    movie: MovieSummary,
    /// Click handler for viewing details
    on_click: Callback<String>,
) -> impl IntoView {
    let movie_id = movie.imdb_id.clone();
    let poster = poster_src(&movie.poster);

    view! {
        <div
            class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                   transition-all duration-300 cursor-pointer border border-gray-100 \
                   flex flex-col h-full overflow-hidden transform hover:-translate-y-1"
            on:click=move |_| on_click.run(movie_id.clone())
        >
            // Poster
            <div class="h-64 bg-gray-100 overflow-hidden group-hover:bg-gray-50 transition-colors">
                <img
                    src=poster
                    alt=movie.title.clone()
                    class="w-full h-full object-cover"
                />
            </div>

            <div class="p-5 flex flex-col flex-1">
                // Title
                <h3 class="font-bold text-gray-900 mb-2 line-clamp-2 text-lg group-hover:text-amber-600 transition-colors">
                    {movie.title.clone()}
                </h3>

                // Metadata: Year and Type
                <div class="flex justify-between items-center text-xs text-gray-500 mt-auto pt-3 border-t border-gray-100">
                    <span class="font-medium bg-gray-100 px-2 py-1 rounded text-gray-600">
                        {movie.year.clone()}
                    </span>
                    <span class="text-gray-400">{movie.kind.clone()}</span>
                </div>
            </div>
        </div>
    }
}

/// Results grid component
///
/// Displays a grid of MovieCards with an empty state.
#[component]
pub fn MovieGrid(
    /// Search results to display
    movies: Signal<Vec<MovieSummary>>,
    /// Click handler for movie details
    on_movie_click: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            // Results header
            <div class="flex justify-between items-center mb-6">
                <span class="text-gray-500 font-medium">
                    {move || {
                        let count = movies.get().len();
                        if count == 1 {
                            "1 movie found".to_string()
                        } else {
                            format!("{} movies found", count)
                        }
                    }}
                </span>
            </div>

            // Grid or empty state
            <Show
                when=move || !movies.get().is_empty()
                fallback=|| view! {
                    <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                        <div class="text-gray-300 text-6xl mb-4">"🎬"</div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">"No movies found"</h3>
                        <p class="text-gray-500 max-w-md mx-auto">
                            "We couldn't find anything matching your search. Try a different title."
                        </p>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    <For
                        each=move || movies.get()
                        key=|m| m.imdb_id.clone()
                        children=move |movie| {
                            let handler = on_movie_click;
                            view! {
                                <MovieCard
                                    movie=movie
                                    on_click=handler
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Movie detail view
///
/// Full movie information display, shown in the detail overlay.
#[component]
pub fn MovieDetailView(
    /// The movie to display
    movie: MovieDetail,
) -> impl IntoView {
    let poster = poster_src(&movie.poster);
    let rating = movie.rating();
    let actors = movie
        .actor_list()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-8">
            // Header Section
            <div class="flex flex-col md:flex-row gap-6">
                // Poster
                <div class="w-full md:w-1/3 bg-gray-100 rounded-xl overflow-hidden">
                    <img
                        src=poster
                        alt=movie.title.clone()
                        class="w-full object-cover"
                    />
                </div>

                // Main Info
                <div class="flex-1 space-y-4">
                    <div>
                        <h2 class="text-3xl font-bold text-gray-900 leading-tight mb-2">
                            {movie.title.clone()} " (" {movie.year.clone()} ")"
                        </h2>
                        <div class="flex items-center gap-3 text-sm text-gray-500">
                            {movie.released.clone()}
                            {movie.runtime.clone()}
                            {movie.rated.clone().map(|rated| view! {
                                <span class="font-semibold text-gray-700 bg-gray-100 px-3 py-1 rounded-full">
                                    {rated}
                                </span>
                            })}
                        </div>
                    </div>

                    // Rating
                    {match rating {
                        Some(value) => {
                            let stars = value / 2.0;
                            view! {
                                <div class="flex items-center gap-2 py-2">
                                    <StarRating rating=stars show_value=false />
                                    <span class="text-gray-600 font-medium">
                                        {format!("{:.1} / 10", value)}
                                    </span>
                                </div>
                            }.into_any()
                        }
                        None => view! {
                            <div class="py-2 text-gray-400">"Not yet rated"</div>
                        }.into_any(),
                    }}

                    // Genre tags
                    {movie.genre.clone().map(|genre| view! {
                        <div class="flex flex-wrap gap-2 pt-2">
                            {genre.split(',').map(|g| g.trim().to_string()).map(|g| view! {
                                <span class="px-3 py-1 text-xs font-medium bg-gray-100 text-gray-600 rounded-full border border-gray-200">
                                    {g}
                                </span>
                            }).collect_view()}
                        </div>
                    })}

                    <div class="text-sm text-gray-600 space-y-1">
                        <p>
                            <span class="font-semibold text-gray-900">"Director: "</span>
                            {movie.director.clone()}
                        </p>
                        {(!actors.is_empty()).then(|| view! {
                            <p>
                                <span class="font-semibold text-gray-900">"Cast: "</span>
                                {actors.join(", ")}
                            </p>
                        })}
                    </div>
                </div>
            </div>

            <hr class="border-gray-100" />

            // Plot
            <div class="prose prose-amber max-w-none">
                <h3 class="text-lg font-bold text-gray-900 mb-3">"Plot"</h3>
                <p class="text-gray-600 leading-relaxed text-lg">
                    {movie.plot.clone()}
                </p>
            </div>
        </div>
    }
}
