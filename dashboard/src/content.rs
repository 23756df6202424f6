//! Static page content shared by both layouts.
//!
//! Defined once here; the fixed and responsive assemblies only differ in how
//! they position it.

use crate::components::Glyph;

/// One card in the "Client Lists" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientListItem {
    /// Stable identifier, unique across the grid
    pub id: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-line description under the heading
    pub description: &'static str,
    /// Number of clients in the list
    pub count: u32,
    /// Icon shown in the card badge
    pub icon: Glyph,
}

/// The six client lists, in display order.
pub const CLIENT_LISTS: [ClientListItem; 6] = [
    ClientListItem {
        id: "recent",
        title: "Recent",
        description: "Recently viewed clients",
        count: 10,
        icon: Glyph::Clock,
    },
    ClientListItem {
        id: "upcoming-meetings",
        title: "Upcoming Meetings",
        description: "Meetings in the next 14 days",
        count: 35,
        icon: Glyph::Calendar,
    },
    ClientListItem {
        id: "time-sensitive",
        title: "Time Sensitive",
        description: "Upcoming deadlines and overdue actions",
        count: 38,
        icon: Glyph::Alert,
    },
    ClientListItem {
        id: "pending-review",
        title: "Pending Review",
        description: "New recs pending advisor review",
        count: 92,
        icon: Glyph::Document,
    },
    ClientListItem {
        id: "planning-gaps",
        title: "Planning Gaps",
        description: "Financial health vulnerabilities",
        count: 41,
        icon: Glyph::Chart,
    },
    ClientListItem {
        id: "needs-outreach",
        title: "Needs Outreach",
        description: "Contact or have client-pending actions",
        count: 23,
        icon: Glyph::User,
    },
];

/// AI filter suggestions rendered as chips under the search bar.
pub const FILTER_SUGGESTIONS: [&str; 3] = [
    "Clients with estate planning gaps",
    "New Parents without a 529 established",
    "Clients above 2M net worth",
];

/// Entries of the "All Clients" dropdown.
pub const CLIENT_FILTERS: [&str; 3] = ["All Clients", "Active Clients", "Archived Clients"];

/// Name greeted by the hero heading.
pub const DEFAULT_USER_NAME: &str = "Laura";

/// Search input placeholder.
pub const SEARCH_PLACEHOLDER: &str = "Search by client name or characteristics";

/// Label above the client list grid.
pub const CLIENT_LISTS_LABEL: &str = "Client Lists";
