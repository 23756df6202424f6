//! Landing chooser, also the fallback for unknown paths.

use leptos::prelude::*;

use super::NavLink;
use crate::routing::{BasePath, Route};
use crate::styles::LANDING_CSS;

/// Title and two links, one per homepage variant.
#[component]
pub fn LandingChooser(base: BasePath, on_navigate: Callback<Route>) -> impl IntoView {
    view! {
        <div class="landing">
            <style>{LANDING_CSS}</style>
            <h1 class="landing-title">"Homepage Demo"</h1>
            <div class="landing-links">
                <NavLink
                    to=Route::Homepage
                    base=base.clone()
                    on_navigate=on_navigate
                    class="landing-link"
                >
                    "Original (Pixel-Perfect)"
                </NavLink>
                <NavLink
                    to=Route::HomepageResponsive
                    base=base
                    on_navigate=on_navigate
                    class="landing-link"
                >
                    "Responsive Version"
                </NavLink>
            </div>
            <p class="landing-note">
                "The original version uses absolute positioning for pixel-perfect design matching (1440x1024). \
                 The responsive version uses flexbox/grid with rem units for responsive design."
            </p>
        </div>
    }
}
