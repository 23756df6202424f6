//! Browser build of the advisor dashboard.
//!
//! Wires [`NavigationShell`] to the real `window.history`: link activations
//! become `pushState` calls and `popstate` re-resolves the route. Rendering
//! is the shared [`RouteView`].

use advisor_dashboard::components::RouteView;
use advisor_dashboard::{
    BasePath, History, HistoryError, HistoryEvents, NavigationShell, Route, Subscription,
};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Base path baked in at build time through `DASHBOARD_BASE_PATH`.
pub fn configured_base() -> BasePath {
    BasePath::new(option_env!("DASHBOARD_BASE_PATH").unwrap_or("/"))
}

/// `window.history` and `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn location(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, path: &str) -> Result<(), HistoryError> {
        let history = web_sys::window()
            .ok_or(HistoryError::Unavailable)?
            .history()
            .map_err(|_| HistoryError::Unavailable)?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(|e| HistoryError::PushRejected(format!("{e:?}")))
    }
}

impl HistoryEvents for BrowserHistory {
    /// One `popstate` listener on `window` per subscription.
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window, history navigation will not be observed");
            return Subscription::new(|| {});
        };

        let callback = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| listener());
        if let Err(err) =
            window.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?err, "failed to listen for popstate");
        }

        Subscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(error = ?err, "failed to remove popstate listener");
            }
        })
    }
}

/// Top-level component: owns the route signal and the history subscription.
///
/// The subscription lives as long as the component's owner; unmounting
/// removes the `popstate` listener.
#[component]
pub fn Shell(base: BasePath) -> impl IntoView {
    let shell = RwSignal::new(NavigationShell::new(BrowserHistory, base.clone()));

    let subscription = BrowserHistory.subscribe(Box::new(move || {
        shell.try_update(|s| {
            s.on_history_navigation();
        });
    }));
    let subscription = StoredValue::new_local(subscription);
    on_cleanup(move || subscription.dispose());

    let navigate = Callback::new(move |target: Route| {
        shell.update(|s| {
            s.activate(target);
        });
    });
    let route = Memo::new(move |_| shell.with(|s| s.route()));

    view! {
        {move || {
            view! { <RouteView route=route.get() base=base.clone() on_navigate=navigate /> }
        }}
    }
}

/// Installs the panic hook and tracing, then mounts [`Shell`] on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let base = configured_base();
    tracing::info!(%base, "mounting advisor dashboard");
    leptos::mount::mount_to_body(move || view! { <Shell base=base /> });
}
