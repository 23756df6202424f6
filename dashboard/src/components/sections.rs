//! Page sections: hero greeting, client list grid and footer.
//!
//! None of them position themselves; the page assembly's stylesheet does.

use leptos::prelude::*;

use super::{Glyph, Icon};
use crate::content::{CLIENT_LISTS, CLIENT_LISTS_LABEL, DEFAULT_USER_NAME};

/// "Welcome back, {name}" heading.
#[component]
pub fn HeroSection(#[prop(into, default = DEFAULT_USER_NAME.to_string())] user_name: String) -> impl IntoView {
    let greeting = format!("Welcome back, {user_name}");
    view! {
        <div class="hero">
            <h1 class="hero-title">{greeting}</h1>
        </div>
    }
}

/// Section label plus one card per entry of [`CLIENT_LISTS`].
#[component]
pub fn ClientListsGrid() -> impl IntoView {
    let cards = CLIENT_LISTS
        .into_iter()
        .map(|item| item.into_card())
        .collect_view();

    view! {
        <section class="client-lists">
            <h2 class="client-lists-label">{CLIENT_LISTS_LABEL}</h2>
            <div class="client-lists-grid">{cards}</div>
        </section>
    }
}

/// Bottom bar with the "Customize" button.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="page-footer-bar">
            <button type="button" class="customize-button">
                <Icon glyph=Glyph::Gear />
                <span class="customize-label">"Customize"</span>
            </button>
        </footer>
    }
}
