// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, global state, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::SearchPage;

/// Root application component
///
/// Sets up:
/// - Meta tags for SEO
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        // HTML meta tags
        <Title text="Movie Zone" />
        <Meta name="description" content="Search the movie catalog and browse details for any title" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link
        <Stylesheet id="leptos" href="/pkg/movie_zone.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=SearchPage />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-amber-500 text-white rounded-lg hover:bg-amber-600 transition-colors"
                >
                    "Go to Search"
                </a>
            </div>
        </div>
    }
}
