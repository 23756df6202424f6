//! Top navigation bar and the "All Clients" dropdown.

use leptos::prelude::*;

use super::{Glyph, Icon};
use crate::content::CLIENT_FILTERS;

/// Hamburger on the left, "Add New Client" and the clients menu on the right.
#[component]
pub fn TopNavigation() -> impl IntoView {
    view! {
        <nav class="top-nav">
            <div class="top-nav-start">
                <button type="button" class="top-nav-menu" aria-label="Menu">
                    <Icon glyph=Glyph::Hamburger size=24 />
                </button>
            </div>
            <div class="top-nav-actions">
                <button type="button" class="add-client-button">
                    <Icon glyph=Glyph::Plus />
                    <span class="add-client-label">"Add New Client"</span>
                </button>
                <ClientsMenu />
            </div>
        </nav>
    }
}

/// Dropdown trigger with a folder badge; opens a popup of client filters.
#[component]
pub fn ClientsMenu() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (selected, set_selected) = signal(CLIENT_FILTERS[0]);

    view! {
        <div class="clients-menu">
            <button
                type="button"
                class="clients-menu-trigger"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="clients-menu-badge">
                    <Icon glyph=Glyph::Folder />
                </span>
                <span class="clients-menu-label">{move || selected.get()}</span>
                <Icon glyph=Glyph::CaretDown size=10 />
            </button>
            <Show when=move || open.get()>
                <ul class="clients-menu-popup" role="menu">
                    {menu_items(selected, set_selected, set_open)}
                </ul>
            </Show>
        </div>
    }
}

fn menu_items(
    selected: ReadSignal<&'static str>,
    set_selected: WriteSignal<&'static str>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    CLIENT_FILTERS
        .iter()
        .map(|&label| {
            view! {
                <li>
                    <button
                        type="button"
                        class=move || {
                            if selected.get() == label { "clients-menu-item active" } else { "clients-menu-item" }
                        }
                        on:click=move |_| {
                            set_selected.set(label);
                            set_open.set(false);
                        }
                    >
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view()
}
