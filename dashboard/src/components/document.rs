//! Root document component - the complete HTML page for static output.

use leptos::prelude::*;

use super::RouteView;
use crate::routing::{BasePath, Route};
use crate::styles::{BASE_CSS, CSP};

/// Browser tab title for a route.
pub fn page_title(route: Route) -> &'static str {
    match route {
        Route::Root | Route::Unresolved => "Homepage Demo",
        Route::Homepage => "Advisor Dashboard",
        Route::HomepageResponsive => "Advisor Dashboard (Responsive)",
    }
}

/// `<html>` element wrapping [`RouteView`].
///
/// Links in static output are plain anchors; nothing is listening for clicks.
#[component]
pub fn PageDocument(route: Route, base: BasePath) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{page_title(route)}</title>
                <style>{BASE_CSS}</style>
            </head>
            <body>
                <RouteView route=route base=base on_navigate=Callback::new(|_| {}) />
            </body>
        </html>
    }
}
