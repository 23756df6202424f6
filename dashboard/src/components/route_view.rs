//! Route to page mapping.

use leptos::prelude::*;

use super::{FixedHomepage, LandingChooser, ResponsiveHomepage};
use crate::routing::{BasePath, Route};

/// Renders the page for `route`. Total: every route has a page, and
/// `Unresolved` shares the landing chooser with `Root`.
#[component]
pub fn RouteView(
    route: Route,
    base: BasePath,
    /// Receives link activations from the landing chooser
    on_navigate: Callback<Route>,
) -> impl IntoView {
    let page = match route {
        Route::Homepage => view! { <FixedHomepage /> }.into_any(),
        Route::HomepageResponsive => view! { <ResponsiveHomepage /> }.into_any(),
        Route::Root | Route::Unresolved => {
            view! { <LandingChooser base=base on_navigate=on_navigate /> }.into_any()
        }
    };

    view! {
        <div class="route-view" data-route=route.name()>
            {page}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(route: Route, base: &str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <RouteView route=route base=BasePath::new(base) on_navigate=Callback::new(|_| {}) />
            }
            .to_html()
        })
    }

    #[test]
    fn every_route_renders_something() {
        for route in Route::ALL {
            let html = render(route, "/app/");
            assert!(html.contains(&format!("data-route=\"{}\"", route.name())));
            assert!(html.len() > 200, "{route} rendered almost nothing");
        }
    }

    #[test]
    fn fallback_routes_render_the_chooser() {
        for route in [Route::Root, Route::Unresolved] {
            let html = render(route, "/app/");
            assert!(html.contains("Homepage Demo"));
            assert!(html.contains("href=\"/app/homepage\""));
            assert!(html.contains("href=\"/app/homepage-responsive\""));
        }
    }

    #[test]
    fn homepage_routes_render_their_layout() {
        assert!(render(Route::Homepage, "").contains("data-layout=\"fixed\""));
        assert!(render(Route::HomepageResponsive, "").contains("data-layout=\"responsive\""));
        assert!(!render(Route::Homepage, "").contains("Homepage Demo"));
    }
}
