//! Page assemblies: the same sections under two layout strategies.
//!
//! The fixed assembly pins every section at its design coordinates inside a
//! 1440x1024 frame. The responsive one flows them in a centered column. Only
//! the wrappers and the stylesheet differ.

use leptos::prelude::*;

use super::{ClientListsGrid, Footer, HeroSection, SearchSection, TopNavigation};
use crate::content::DEFAULT_USER_NAME;
use crate::styles::{COMPONENT_CSS, FIXED_CSS, RESPONSIVE_CSS};

/// Positioning strategy of a page assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Absolute positioning at design coordinates
    Fixed,
    /// Flexbox/grid with relative units
    Responsive,
}

impl Layout {
    /// Class list of the assembly root.
    pub const fn class(self) -> &'static str {
        match self {
            Layout::Fixed => "page page--fixed",
            Layout::Responsive => "page page--responsive",
        }
    }

    /// Layout-specific stylesheet, appended to [`COMPONENT_CSS`].
    pub const fn stylesheet(self) -> &'static str {
        match self {
            Layout::Fixed => FIXED_CSS,
            Layout::Responsive => RESPONSIVE_CSS,
        }
    }
}

/// Pixel-perfect homepage (1440x1024 frame).
#[component]
pub fn FixedHomepage(
    #[prop(into, default = DEFAULT_USER_NAME.to_string())] user_name: String,
) -> impl IntoView {
    let layout = Layout::Fixed;
    view! {
        <div class=layout.class() data-layout="fixed">
            <style>{COMPONENT_CSS}</style>
            <style>{layout.stylesheet()}</style>
            <div class="page-backdrop"></div>
            <TopNavigation />
            <HeroSection user_name=user_name />
            <SearchSection />
            <ClientListsGrid />
            <Footer />
        </div>
    }
}

/// Responsive homepage (flow layout, rem units).
#[component]
pub fn ResponsiveHomepage(
    #[prop(into, default = DEFAULT_USER_NAME.to_string())] user_name: String,
) -> impl IntoView {
    let layout = Layout::Responsive;
    view! {
        <div class=layout.class() data-layout="responsive">
            <style>{COMPONENT_CSS}</style>
            <style>{layout.stylesheet()}</style>
            <div class="page-backdrop"></div>
            <div class="page-nav">
                <TopNavigation />
            </div>
            <main class="page-main">
                <div class="page-hero">
                    <HeroSection user_name=user_name />
                </div>
                <div class="page-search">
                    <SearchSection />
                </div>
                <ClientListsGrid />
            </main>
            <div class="page-footer">
                <Footer />
            </div>
        </div>
    }
}
