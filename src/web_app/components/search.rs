// web_app/components/search.rs - Search-related UI components
//
// The search bar keeps its own local input state so typing never fires a
// request; a search runs only on explicit form submission.

use leptos::prelude::*;

/// Search bar component
///
/// Handles user input and explicit search submission.
#[component]
pub fn SearchBar(
    /// Current search query
    query: RwSignal<String>,
    /// Callback when search is triggered
    on_search: Callback<()>,
) -> impl IntoView {
    // Local state for the input (allows typing without triggering a search)
    let local_query = RwSignal::new(query.get_untracked());

    // Sync local with external when external changes
    Effect::new(move || {
        local_query.set(query.get());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        query.set(local_query.get());
        on_search.run(());
    };

    view! {
        <form on:submit=on_submit class="w-full">
            <div class="flex gap-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder="Search movies..."
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-amber-100 focus:border-amber-500 \
                               outline-none text-lg transition-all shadow-sm"
                        prop:value=move || local_query.get()
                        on:input=move |ev| local_query.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="px-8 py-3 bg-amber-500 text-white rounded-xl \
                           hover:bg-amber-600 active:bg-amber-700 transition-all \
                           font-semibold shadow-md hover:shadow-lg transform hover:-translate-y-0.5"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}
