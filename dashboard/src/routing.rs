//! Route table and base-path aware resolution.
//!
//! Every location string maps to exactly one [`Route`]. Paths the table does
//! not know resolve to [`Route::Unresolved`], which renders the landing chooser.
//!
//! ```rust
//! use advisor_dashboard::routing::{resolve, BasePath, Route};
//!
//! let base = BasePath::new("/app/");
//! assert_eq!(resolve("/app/homepage", &base), Route::Homepage);
//! assert_eq!(resolve("/app", &base), Route::Root);
//! assert_eq!(resolve("/app/nope", &base), Route::Unresolved);
//! ```

use std::fmt;

use serde::Serialize;

/// Logical page identity derived from the current location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Landing chooser
    #[default]
    Root,
    /// Fixed-layout (pixel-perfect, 1440x1024) homepage
    Homepage,
    /// Responsive homepage
    HomepageResponsive,
    /// Anything the route table does not know
    Unresolved,
}

impl Route {
    /// Every route value, fallback included.
    pub const ALL: [Route; 4] = [
        Route::Root,
        Route::Homepage,
        Route::HomepageResponsive,
        Route::Unresolved,
    ];

    /// Routes that own a path and can be the target of a link.
    pub const LINKABLE: [Route; 3] = [Route::Root, Route::Homepage, Route::HomepageResponsive];

    /// Path of the route relative to the base path, with a leading slash.
    ///
    /// `Unresolved` has no path of its own.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Route::Root => Some("/"),
            Route::Homepage => Some("/homepage"),
            Route::HomepageResponsive => Some("/homepage-responsive"),
            Route::Unresolved => None,
        }
    }

    /// Matches a base-relative path against the route table.
    pub fn from_relative(relative: &str) -> Route {
        match relative {
            "/" => Route::Root,
            "/homepage" => Route::Homepage,
            "/homepage-responsive" => Route::HomepageResponsive,
            _ => Route::Unresolved,
        }
    }

    /// The route a link to `self` actually lands on.
    pub const fn link_target(self) -> Route {
        match self {
            Route::Unresolved => Route::Root,
            other => other,
        }
    }

    /// True for the routes rendered by the landing chooser.
    pub const fn is_fallback(self) -> bool {
        matches!(self, Route::Root | Route::Unresolved)
    }

    /// Short stable name, used in logs and the prerender manifest.
    pub const fn name(self) -> &'static str {
        match self {
            Route::Root => "root",
            Route::Homepage => "homepage",
            Route::HomepageResponsive => "homepage-responsive",
            Route::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deployment prefix the application is served under.
///
/// Normalized to start and end with `/`; an empty prefix becomes `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Normalizes `raw` into a base path.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let inner = raw.as_ref().trim().trim_matches('/');
        if inner.is_empty() {
            BasePath("/".to_string())
        } else {
            BasePath(format!("/{inner}/"))
        }
    }

    /// The prefix, always with leading and trailing slash.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix without its trailing slash (`""` for the root base).
    pub fn trimmed(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    /// Absolute href for `route` under this base.
    pub fn href(&self, route: Route) -> String {
        match route.link_target().suffix() {
            Some("/") | None => self.0.clone(),
            Some(suffix) => format!("{}{}", self.0, &suffix[1..]),
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        BasePath("/".to_string())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a raw location path to a [`Route`].
///
/// Total: never panics and always yields one of the four routes.
pub fn resolve(path: &str, base: &BasePath) -> Route {
    let prefix = base.as_str();
    if path == prefix || path == base.trimmed() {
        return Route::Root;
    }

    // Paths outside the prefix are treated as already relative.
    let relative = match path.strip_prefix(prefix) {
        Some(_) => &path[prefix.len() - 1..],
        None => path,
    };

    Route::from_relative(relative)
}
