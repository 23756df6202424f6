//! # advisor-dashboard
//!
//! Components and routing core for the advisor dashboard demo: a mock
//! financial-advisor homepage rendered with two layout strategies, a landing
//! chooser, and a tiny client-side router that ties them together.
//!
//! ## Features
//!
//! - **Total routing** - every location maps to a [`Route`]; unknown paths get
//!   the landing chooser, never a blank page
//! - **Base-path aware** - serve the app under any prefix (`/`, `/app/`, ...)
//! - **History model** - [`NavigationShell`] keeps route state consistent with
//!   pushes and back/forward traversal, testable with [`MemoryHistory`]
//! - **One content model, two layouts** - fixed (1440x1024) and responsive
//!   assemblies render the same sections from the same data
//!
//! ## Quick Start
//!
//! ```rust
//! use advisor_dashboard::{render_page, routing::{BasePath, Route}};
//!
//! let html = render_page(Route::Homepage, &BasePath::new("/app/"));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`routing`] - route enum, base path, resolution
//! - [`history`] - history traits and the in-memory implementation
//! - [`shell`] - navigation state machine and link-click policy
//! - [`content`] - static page data
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! [`render_page`] needs the `ssr` feature. The browser build leaves it off
//! and enables Leptos `csr` instead.
//!
//! The browser entry point (reactive shell, `pushState`, `popstate`) lives in
//! the `advisor-dashboard-web` crate.

#![recursion_limit = "256"]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod history;
pub mod routing;
pub mod shell;
pub mod styles;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

pub use history::{History, HistoryError, HistoryEvents, MemoryHistory, Subscription};
pub use routing::{resolve, BasePath, Route};
pub use shell::{LinkClick, MountedShell, NavigationShell};

/// Render a complete HTML document for one route.
///
/// Links are plain anchors under `base`; the output needs no script.
///
/// # Example
///
/// ```rust
/// use advisor_dashboard::{render_page, BasePath, Route};
///
/// let html = render_page(Route::Unresolved, &BasePath::default());
/// assert!(html.contains("Homepage Demo"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(route: Route, base: &BasePath) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <PageDocument route=route base=base.clone() /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_renders_a_complete_document() {
        for route in Route::ALL {
            let html = render_page(route, &BasePath::new("/app/"));
            assert!(html.starts_with("<!DOCTYPE html>"), "{route}");
            assert!(html.contains("</body></html>"), "{route}");
            assert!(html.contains(&format!("data-route=\"{}\"", route.name())), "{route}");
        }
    }

    #[test]
    fn renders_landing_document() {
        let html = render_page(Route::Root, &BasePath::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("Homepage Demo"));
        assert!(html.contains("href=\"/homepage\""));
    }

    #[test]
    fn renders_fixed_homepage_document() {
        let html = render_page(Route::Homepage, &BasePath::new("/app"));

        assert!(html.contains("Advisor Dashboard"));
        assert!(html.contains("page--fixed"));
        assert!(html.contains("Welcome back, Laura"));
        assert!(html.contains("Needs Outreach"));
    }

    #[test]
    fn renders_responsive_homepage_document() {
        let html = render_page(Route::HomepageResponsive, &BasePath::default());

        assert!(html.contains("page--responsive"));
        assert!(html.contains("Clients with estate planning gaps"));
    }

    #[test]
    fn unresolved_document_is_the_landing_chooser() {
        let html = render_page(Route::Unresolved, &BasePath::new("/app/"));

        assert!(html.contains("data-route=\"unresolved\""));
        assert!(html.contains("Original (Pixel-Perfect)"));
        assert!(html.contains("href=\"/app/homepage-responsive\""));
    }

    #[test]
    fn document_declares_a_script_free_policy() {
        let html = render_page(Route::Root, &BasePath::default());
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("script-src"));
    }
}
