//! Navigation shell: the single owner of the current [`Route`].
//!
//! Route state changes through exactly two paths:
//!
//! - **history navigation** (back/forward): the location is re-resolved;
//! - **link activation**: a history entry is pushed and the target route is
//!   assigned directly.
//!
//! Both are synchronous. The browser build keeps a [`NavigationShell`] inside a
//! reactive signal; [`NavigationShell::mount`] gives the same wiring for any
//! [`HistoryEvents`] source.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::history::{History, HistoryEvents, Subscription};
use crate::routing::{resolve, BasePath, Route};

/// Route state plus the history it is derived from.
#[derive(Clone, Debug)]
pub struct NavigationShell<H> {
    history: H,
    base: BasePath,
    route: Route,
}

impl<H: History> NavigationShell<H> {
    /// Resolves the initial route from the history's current location.
    pub fn new(history: H, base: BasePath) -> Self {
        let path = history.location();
        let route = resolve(&path, &base);
        debug!(%path, %base, %route, "navigation shell initialized");
        Self {
            history,
            base,
            route,
        }
    }

    /// Route currently rendered.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Base path the shell was configured with.
    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Underlying history.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Absolute href for a link to `route`.
    pub fn href(&self, route: Route) -> String {
        self.base.href(route)
    }

    /// Re-derives the route after a back/forward navigation.
    pub fn on_history_navigation(&mut self) -> Route {
        let path = self.history.location();
        let route = resolve(&path, &self.base);
        debug!(%path, from = %self.route, to = %route, "history navigation");
        self.route = route;
        route
    }

    /// Handles an intercepted link click towards `target`.
    ///
    /// The state always transitions, even when the history refuses the entry.
    pub fn activate(&mut self, target: Route) -> Route {
        let target = target.link_target();
        let href = self.base.href(target);
        if let Err(err) = self.history.push(&href) {
            warn!(%href, error = %err, "history push failed, switching view without an entry");
        }
        debug!(%href, from = %self.route, to = %target, "link activated");
        self.route = target;
        target
    }
}

impl<H: History + HistoryEvents + 'static> NavigationShell<H> {
    /// Subscribes the shell to history navigation for the lifetime of the
    /// returned handle.
    pub fn mount(self) -> MountedShell<H> {
        let shell = Rc::new(RefCell::new(self));
        let weak = Rc::downgrade(&shell);
        let subscription = shell
            .borrow()
            .history
            .subscribe(Box::new(move || {
                if let Some(shell) = weak.upgrade() {
                    shell.borrow_mut().on_history_navigation();
                }
            }));
        MountedShell {
            shell,
            subscription,
        }
    }
}

/// A shell wired to its history events. Dropping it unsubscribes.
pub struct MountedShell<H> {
    shell: Rc<RefCell<NavigationShell<H>>>,
    subscription: Subscription,
}

impl<H: History> MountedShell<H> {
    /// Route currently rendered.
    pub fn route(&self) -> Route {
        self.shell.borrow().route()
    }

    /// See [`NavigationShell::activate`].
    pub fn activate(&self, target: Route) -> Route {
        self.shell.borrow_mut().activate(target)
    }

    /// Absolute href for a link to `route`.
    pub fn href(&self, route: Route) -> String {
        self.shell.borrow().href(route)
    }

    /// A handle on the history, for driving back/forward.
    pub fn history(&self) -> H
    where
        H: Clone,
    {
        self.shell.borrow().history.clone()
    }

    /// Unsubscribes and hands the shell back.
    pub fn unmount(self) -> NavigationShell<H>
    where
        H: Clone,
    {
        self.subscription.release();
        let shell = self.shell.borrow();
        NavigationShell {
            history: shell.history.clone(),
            base: shell.base.clone(),
            route: shell.route,
        }
    }
}

impl<H> std::fmt::Debug for MountedShell<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedShell")
            .field("route", &self.shell.borrow().route)
            .field("subscription", &self.subscription)
            .finish()
    }
}

/// Snapshot of a pointer activation on an in-shell link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkClick {
    /// `MouseEvent.button`; 0 is the primary button.
    pub button: i16,
    /// Ctrl held.
    pub ctrl: bool,
    /// Meta (Cmd) held.
    pub meta: bool,
    /// Shift held.
    pub shift: bool,
    /// Alt held.
    pub alt: bool,
    /// Another handler already called `preventDefault`.
    pub default_prevented: bool,
}

impl LinkClick {
    /// Plain primary-button click.
    pub const PRIMARY: LinkClick = LinkClick {
        button: 0,
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
        default_prevented: false,
    };

    /// Reads the relevant fields off a DOM click.
    pub fn from_event(ev: &web_sys::MouseEvent) -> Self {
        Self {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            default_prevented: ev.default_prevented(),
        }
    }

    /// Whether the shell takes over this click.
    ///
    /// Modified clicks (new tab, new window, download) stay with the browser.
    pub fn should_intercept(&self) -> bool {
        self.button == 0
            && !self.default_prevented
            && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}
