//! In-shell anchor that navigates without a page reload.

use leptos::ev;
use leptos::prelude::*;

use crate::routing::{BasePath, Route};
use crate::shell::LinkClick;

/// Anchor to `to` under `base`.
///
/// Plain primary clicks are intercepted: the default navigation is prevented
/// and `on_navigate` receives the target route. Modified clicks keep the
/// browser's behavior, so the real `href` still matters.
#[component]
pub fn NavLink(
    /// Route the link points at
    to: Route,
    /// Deployment base path used to build the href
    base: BasePath,
    /// Invoked with `to` when the click is intercepted
    on_navigate: Callback<Route>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let href = base.href(to);
    view! {
        <a
            href=href
            class=class
            data-route=to.name()
            on:click=move |ev: ev::MouseEvent| {
                if LinkClick::from_event(&ev).should_intercept() {
                    ev.prevent_default();
                    on_navigate.run(to);
                }
            }
        >
            {children()}
        </a>
    }
}
