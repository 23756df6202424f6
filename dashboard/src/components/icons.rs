//! Inline SVG icons.
//!
//! All glyphs are stroked outlines on a 16x16 grid drawn with `currentColor`,
//! so they pick up the text color of whatever contains them.

use leptos::prelude::*;

/// Icon identity. Rendering lives in [`Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Clock face (recent)
    Clock,
    /// Calendar page (meetings)
    Calendar,
    /// Warning triangle (deadlines)
    Alert,
    /// Folded document (reviews)
    Document,
    /// Bar chart (planning gaps)
    Chart,
    /// Person outline (outreach)
    User,
    /// Three-line menu
    Hamburger,
    /// Plus sign
    Plus,
    /// Folder
    Folder,
    /// Downward caret
    CaretDown,
    /// Gear (customize)
    Gear,
    /// Plus inside the search action button
    SearchPlus,
}

impl Glyph {
    /// SVG path data for the glyph, in drawing order.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Clock => &[PATH_CLOCK_FACE, PATH_CLOCK_HANDS],
            Glyph::Calendar => &[PATH_CALENDAR_PAGE, PATH_CALENDAR_RINGS],
            Glyph::Alert => &[PATH_ALERT_TRIANGLE, PATH_ALERT_MARK],
            Glyph::Document => &[PATH_DOCUMENT_SHEET, PATH_DOCUMENT_FOLD],
            Glyph::Chart => &[PATH_CHART],
            Glyph::User => &[PATH_USER_HEAD, PATH_USER_BODY],
            Glyph::Hamburger => &[PATH_HAMBURGER],
            Glyph::Plus => &[PATH_PLUS],
            Glyph::Folder => &[PATH_FOLDER],
            Glyph::CaretDown => &[PATH_CARET_DOWN],
            Glyph::Gear => &[PATH_GEAR_HUB, PATH_GEAR_TEETH],
            Glyph::SearchPlus => &[PATH_SEARCH_PLUS],
        }
    }

    /// Lowercase name, rendered as `data-glyph`.
    pub const fn name(self) -> &'static str {
        match self {
            Glyph::Clock => "clock",
            Glyph::Calendar => "calendar",
            Glyph::Alert => "alert",
            Glyph::Document => "document",
            Glyph::Chart => "chart",
            Glyph::User => "user",
            Glyph::Hamburger => "hamburger",
            Glyph::Plus => "plus",
            Glyph::Folder => "folder",
            Glyph::CaretDown => "caret-down",
            Glyph::Gear => "gear",
            Glyph::SearchPlus => "search-plus",
        }
    }
}

/// Renders a [`Glyph`] as inline SVG.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Folder size=24 /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    glyph: Glyph,
    /// Rendered width and height in pixels
    #[prop(default = 16)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    let paths = glyph
        .paths()
        .iter()
        .map(|d| view! { <path d=*d></path> })
        .collect_view();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 16 16"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-glyph=glyph.name()
        >
            {paths}
        </svg>
    }
}

// =============================================================================
// Path data (16x16 grid)
// =============================================================================

const PATH_CLOCK_FACE: &str = "M14 8A6 6 0 1 1 2 8A6 6 0 1 1 14 8Z";
const PATH_CLOCK_HANDS: &str = "M8 4.5V8L10.5 9.5";

const PATH_CALENDAR_PAGE: &str = "M4 3H12A2 2 0 0 1 14 5V12A2 2 0 0 1 12 14H4A2 2 0 0 1 2 12V5A2 2 0 0 1 4 3Z";
const PATH_CALENDAR_RINGS: &str = "M2 7H14M5 1V3M11 1V3";

const PATH_ALERT_TRIANGLE: &str = "M8 2L14.5 13.5H1.5Z";
const PATH_ALERT_MARK: &str = "M8 6.5V9.5M8 11.5V11.6";

const PATH_DOCUMENT_SHEET: &str = "M9 1.5L13.5 6V13C13.5 13.8284 12.8284 14.5 12 14.5H4C3.17157 14.5 2.5 13.8284 2.5 13V3C2.5 2.17157 3.17157 1.5 4 1.5H9Z";
const PATH_DOCUMENT_FOLD: &str = "M9 1.5V6H13.5";

const PATH_CHART: &str = "M2 14V8M8 14V2M14 14V5";

const PATH_USER_HEAD: &str = "M10.5 5A2.5 2.5 0 1 1 5.5 5A2.5 2.5 0 1 1 10.5 5Z";
const PATH_USER_BODY: &str = "M3 14C3 11.2 5.2 9.5 8 9.5C10.8 9.5 13 11.2 13 14";

const PATH_HAMBURGER: &str = "M2 4H14M2 8H14M2 12H14";

const PATH_PLUS: &str = "M8 3V13M3 8H13";

const PATH_FOLDER: &str = "M2 4.5A1.5 1.5 0 0 1 3.5 3H6.5L8 4.5H12.5A1.5 1.5 0 0 1 14 6V11.5A1.5 1.5 0 0 1 12.5 13H3.5A1.5 1.5 0 0 1 2 11.5Z";

const PATH_CARET_DOWN: &str = "M3 6L8 11L13 6";

const PATH_GEAR_HUB: &str = "M10 8A2 2 0 1 1 6 8A2 2 0 1 1 10 8Z";
const PATH_GEAR_TEETH: &str = "M8 1.5V3M8 13V14.5M1.5 8H3M13 8H14.5M3.4 3.4L4.5 4.5M11.5 11.5L12.6 12.6M3.4 12.6L4.5 11.5M11.5 4.5L12.6 3.4";

const PATH_SEARCH_PLUS: &str = "M8 5V11M5 8H11";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    const ALL: [Glyph; 12] = [
        Glyph::Clock,
        Glyph::Calendar,
        Glyph::Alert,
        Glyph::Document,
        Glyph::Chart,
        Glyph::User,
        Glyph::Hamburger,
        Glyph::Plus,
        Glyph::Folder,
        Glyph::CaretDown,
        Glyph::Gear,
        Glyph::SearchPlus,
    ];

    #[test]
    fn every_glyph_has_path_data() {
        for glyph in ALL {
            assert!(!glyph.paths().is_empty(), "{glyph:?}");
            assert!(glyph.paths().iter().all(|d| d.starts_with('M')), "{glyph:?}");
        }
    }

    #[test]
    fn icon_renders_svg_with_size() {
        let html = view! { <Icon glyph=Glyph::Gear size=24 /> }.to_html();
        assert!(html.starts_with("<svg"));
        assert!(html.contains("width=\"24\""));
        assert!(html.contains("data-glyph=\"gear\""));
        assert_eq!(html.matches("<path").count(), 2);
    }
}
