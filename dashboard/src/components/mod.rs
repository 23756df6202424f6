//! Leptos UI components for the dashboard pages.
//!
//! Leaf components are stateless apart from the clients dropdown; sections
//! compose leaves; page assemblies compose sections under a [`Layout`].
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static output only)
//! └── RouteView
//!     ├── Root | Unresolved: LandingChooser
//!     │   └── NavLink x2
//!     ├── Homepage: FixedHomepage
//!     └── HomepageResponsive: ResponsiveHomepage
//!         ├── TopNavigation
//!         │   └── ClientsMenu
//!         ├── HeroSection
//!         ├── SearchSection
//!         │   ├── SearchBar
//!         │   └── FilterChip x3
//!         ├── ClientListsGrid
//!         │   └── ClientListCard x6
//!         │       └── IconBadge
//!         └── Footer
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use advisor_dashboard::components::RouteView;
//! use advisor_dashboard::routing::{BasePath, Route};
//!
//! view! {
//!     <RouteView route=Route::Root base=BasePath::default() on_navigate=Callback::new(|_| {}) />
//! }
//! ```

mod card;
mod document;
mod homepage;
mod icons;
mod landing;
mod link;
mod navigation;
mod route_view;
mod search;
mod sections;

pub use card::{ClientListCard, IconBadge};
pub use document::{page_title, PageDocument};
pub use homepage::{FixedHomepage, Layout, ResponsiveHomepage};
pub use icons::*;
pub use landing::LandingChooser;
pub use link::NavLink;
pub use navigation::{ClientsMenu, TopNavigation};
pub use route_view::RouteView;
pub use search::{FilterChip, SearchBar, SearchSection};
pub use sections::{ClientListsGrid, Footer, HeroSection};
