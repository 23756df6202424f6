//! Search bar, AI filter chips and the section combining them.
//!
//! Both leaves report back through optional callbacks. The shell does not
//! consume them; they exist so an embedding page can.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use super::{Glyph, Icon};
use crate::content::{FILTER_SUGGESTIONS, SEARCH_PLACEHOLDER};

/// Text input with an action button.
///
/// `on_search` receives the current query on Enter or on the button.
#[component]
pub fn SearchBar(
    #[prop(into, default = SEARCH_PLACEHOLDER.to_string())] placeholder: String,
    #[prop(optional)] on_search: Option<Callback<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    let submit = move || {
        let Some(callback) = on_search else {
            return;
        };
        if let Some(input) = input_ref.get_untracked() {
            callback.run(input.value());
        }
    };

    view! {
        <div class="search-bar">
            <div class="search-bar-inner">
                <input
                    node_ref=input_ref
                    type="text"
                    class="search-input"
                    placeholder=placeholder
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button type="button" class="search-submit" on:click=move |_| submit()>
                    <span class="search-submit-icon">
                        <Icon glyph=Glyph::SearchPlus size=32 />
                    </span>
                </button>
            </div>
        </div>
    }
}

/// Pill-shaped suggestion button with a gradient border.
#[component]
pub fn FilterChip(
    #[prop(into)] label: String,
    #[prop(optional)] on_activate: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="filter-chip">
            <button
                type="button"
                class="filter-chip-button"
                on:click=move |_| {
                    if let Some(callback) = on_activate {
                        callback.run(());
                    }
                }
            >
                <span class="filter-chip-label">{label}</span>
            </button>
        </div>
    }
}

/// Search bar followed by the row of filter suggestions.
#[component]
pub fn SearchSection(
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] on_filter: Option<Callback<()>>,
) -> impl IntoView {
    let forward_search = Callback::new(move |query: String| {
        if let Some(callback) = on_search {
            callback.run(query);
        }
    });
    let forward_filter = Callback::new(move |()| {
        if let Some(callback) = on_filter {
            callback.run(());
        }
    });

    let chips = FILTER_SUGGESTIONS
        .iter()
        .map(|label| view! { <FilterChip label=*label on_activate=forward_filter /> })
        .collect_view();

    view! {
        <section class="search-section">
            <div class="search-section-stack">
                <SearchBar on_search=forward_search />
                <div class="filter-chips">{chips}</div>
            </div>
        </section>
    }
}
