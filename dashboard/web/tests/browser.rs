//! In-browser checks for the pushState adapter, the mounted shell and the
//! leaf callbacks.
//!
//! Run with `wasm-pack test --headless --firefox dashboard/web`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use advisor_dashboard::components::{FilterChip, SearchBar, SearchSection};
use advisor_dashboard::{BasePath, History, HistoryEvents, NavigationShell, Route};
use advisor_dashboard_web::{BrowserHistory, Shell};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit,
    PopStateEvent,
};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// Every test starts from a known location; the runner's page is shared.
fn start_at(path: &str) {
    BrowserHistory.push(path).unwrap();
    assert_eq!(BrowserHistory.location(), path);
}

fn container() -> HtmlElement {
    let document = window().document().unwrap();
    let root = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn query<T: JsCast>(root: &HtmlElement, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<T>()
        .unwrap()
}

fn rendered_route(root: &HtmlElement) -> Option<String> {
    root.query_selector(".route-view")
        .unwrap()
        .and_then(|el| el.get_attribute("data-route"))
}

fn dispatch_popstate() {
    let event = PopStateEvent::new("popstate").unwrap();
    window().dispatch_event(&event).unwrap();
}

fn primary_click() -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_button(0);
    MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
}

/// Lets scheduled reactive effects run.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

// ============================================
// BrowserHistory
// ============================================

#[wasm_bindgen_test]
fn push_updates_the_location() {
    start_at("/");
    BrowserHistory.push("/homepage").unwrap();
    assert_eq!(BrowserHistory.location(), "/homepage");
}

#[wasm_bindgen_test]
fn activation_moves_the_browser_location() {
    start_at("/app/");
    let mut shell = NavigationShell::new(BrowserHistory, BasePath::new("/app/"));
    assert_eq!(shell.route(), Route::Root);
    assert_eq!(shell.activate(Route::HomepageResponsive), Route::HomepageResponsive);
    assert_eq!(BrowserHistory.location(), "/app/homepage-responsive");
}

#[wasm_bindgen_test]
fn initial_route_reads_the_current_pathname() {
    start_at("/homepage");
    let shell = NavigationShell::new(BrowserHistory, BasePath::default());
    assert_eq!(shell.route(), Route::Homepage);
}

#[wasm_bindgen_test]
fn popstate_listener_fires_until_released() {
    start_at("/");
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let subscription = BrowserHistory.subscribe(Box::new(move || counter.set(counter.get() + 1)));

    dispatch_popstate();
    assert_eq!(calls.get(), 1);

    drop(subscription);
    dispatch_popstate();
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn push_does_not_notify_subscribers() {
    start_at("/");
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let _subscription =
        BrowserHistory.subscribe(Box::new(move || counter.set(counter.get() + 1)));

    BrowserHistory.push("/homepage").unwrap();
    assert_eq!(calls.get(), 0);
}

// ============================================
// Mounted Shell
// ============================================

#[wasm_bindgen_test]
async fn shell_re_resolves_on_popstate() {
    start_at("/");
    let root = container();
    let handle = mount_to(root.clone(), || view! { <Shell base=BasePath::default() /> });
    assert_eq!(rendered_route(&root).as_deref(), Some("root"));

    BrowserHistory.push("/homepage").unwrap();
    dispatch_popstate();
    settle().await;
    assert_eq!(rendered_route(&root).as_deref(), Some("homepage"));

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn primary_click_on_link_switches_without_reload() {
    start_at("/");
    let root = container();
    let handle = mount_to(root.clone(), || view! { <Shell base=BasePath::default() /> });

    let link: HtmlElement = query(&root, "a[data-route=\"homepage\"]");
    let click = primary_click();
    let not_canceled = link.dispatch_event(&click).unwrap();

    assert!(!not_canceled);
    assert!(click.default_prevented());
    assert_eq!(BrowserHistory.location(), "/homepage");
    settle().await;
    assert_eq!(rendered_route(&root).as_deref(), Some("homepage"));

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
fn unknown_path_renders_the_landing_chooser() {
    start_at("/somewhere-else");
    let root = container();
    let handle = mount_to(root.clone(), || view! { <Shell base=BasePath::default() /> });

    assert_eq!(rendered_route(&root).as_deref(), Some("unresolved"));
    assert!(root.inner_html().contains("Homepage Demo"));

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn remounted_shell_follows_history_alone() {
    start_at("/");
    let first = container();
    let handle = mount_to(first.clone(), || view! { <Shell base=BasePath::default() /> });
    drop(handle);
    first.remove();

    let root = container();
    let handle = mount_to(root.clone(), || view! { <Shell base=BasePath::default() /> });
    BrowserHistory.push("/homepage-responsive").unwrap();
    dispatch_popstate();
    settle().await;

    assert_eq!(rendered_route(&root).as_deref(), Some("homepage-responsive"));
    let document = window().document().unwrap();
    assert_eq!(document.query_selector_all(".route-view").unwrap().length(), 1);

    drop(handle);
    root.remove();
}

// ============================================
// Leaf callbacks
// ============================================

#[wasm_bindgen_test]
fn search_bar_reports_the_query_on_enter_and_button() {
    let queries = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = queries.clone();
    let root = container();
    let handle = mount_to(root.clone(), move || {
        view! {
            <SearchBar on_search=Callback::new(move |query: String| {
                sink.lock().unwrap().push(query)
            }) />
        }
    });

    let input: HtmlInputElement = query(&root, "input.search-input");
    input.set_value("estate planning gaps");

    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_bubbles(true);
    let enter = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&enter).unwrap();

    query::<HtmlElement>(&root, "button.search-submit").click();

    assert_eq!(
        *queries.lock().unwrap(),
        vec!["estate planning gaps".to_string(), "estate planning gaps".to_string()]
    );

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
fn other_keys_do_not_submit() {
    let queries = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = queries.clone();
    let root = container();
    let handle = mount_to(root.clone(), move || {
        view! {
            <SearchBar on_search=Callback::new(move |query: String| {
                sink.lock().unwrap().push(query)
            }) />
        }
    });

    let input: HtmlInputElement = query(&root, "input.search-input");
    let init = KeyboardEventInit::new();
    init.set_key("a");
    init.set_bubbles(true);
    let key = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&key).unwrap();

    assert!(queries.lock().unwrap().is_empty());

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
fn filter_chip_reports_activation() {
    let hits = Arc::new(Mutex::new(0));
    let sink = hits.clone();
    let root = container();
    let handle = mount_to(root.clone(), move || {
        view! {
            <FilterChip
                label="Clients with estate planning gaps"
                on_activate=Callback::new(move |()| *sink.lock().unwrap() += 1)
            />
        }
    });

    query::<HtmlElement>(&root, "button.filter-chip-button").click();
    assert_eq!(*hits.lock().unwrap(), 1);

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
fn search_section_forwards_chip_activations() {
    let hits = Arc::new(Mutex::new(0));
    let sink = hits.clone();
    let root = container();
    let handle = mount_to(root.clone(), move || {
        view! { <SearchSection on_filter=Callback::new(move |()| *sink.lock().unwrap() += 1) /> }
    });

    let chips = root.query_selector_all("button.filter-chip-button").unwrap();
    for i in 0..chips.length() {
        chips.item(i).unwrap().dyn_into::<HtmlElement>().unwrap().click();
    }
    assert_eq!(*hits.lock().unwrap(), chips.length() as i32);

    drop(handle);
    root.remove();
}
