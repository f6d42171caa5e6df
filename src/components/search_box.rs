//! Debounced search input.

use std::time::Duration;

use leptos::prelude::*;

use crate::util::debounce::Debouncer;

/// Quiet period before a search term is delivered.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Text input that delivers its value through a trailing debounce, so a
/// burst of keystrokes results in a single `on_search` call carrying the
/// final text.
#[component]
pub fn SearchBox(
    /// Invoked with the settled search text.
    on_search: Callback<String>,
    /// Input placeholder.
    #[prop(default = "Поиск...")] placeholder: &'static str,
) -> impl IntoView {
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE, move |term: String| on_search.run(term));

    view! {
        <input
            class="search-box"
            type="search"
            placeholder=placeholder
            on:input=move |ev| debouncer.call(event_target_value(&ev))
        />
    }
}
