//! Client-side router mapping URL paths to view renderers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router owns an in-memory route table and the last resolved path. It
//! reads and writes browser navigation through the [`History`] seam, so the
//! same resolution logic runs against `window.history` in the browser and
//! against [`MemoryHistory`] in native hosts and tests.
//!
//! DESIGN
//! ======
//! Lookup is exact string equality on the path. An unmatched path is the
//! defined fallback state, never an error. View failures propagate to whoever
//! asked for resolution; resolutions triggered by browser listeners have no
//! caller, so those failures are logged instead.


pub mod history;
pub mod link;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

pub use history::{BrowserHistory, History, MemoryHistory, NavigationHandlers};
pub use link::{ClickModifiers, LinkNode, MemoryNode};

/// Errors raised by view renderers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("view render failed: {0}")]
    Render(String),
    #[error("mount target missing: {0}")]
    MissingMount(String),
}

/// A view renderer. Invoked with no arguments on every resolution.
pub type View = Rc<dyn Fn() -> Result<(), ViewError>>;

/// A `(path, view)` pair registered with the router.
#[derive(Clone)]
pub struct Route {
    pub path: String,
    pub view: View,
}

impl Route {
    pub fn new<F>(path: impl Into<String>, view: F) -> Self
    where
        F: Fn() -> Result<(), ViewError> + 'static,
    {
        Self { path: path.into(), view: Rc::new(view) }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route").field("path", &self.path).finish_non_exhaustive()
    }
}

/// Resolution state of a router.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RouterState {
    /// Constructed, nothing rendered yet.
    #[default]
    Unresolved,
    /// Last resolution ran for this path.
    Resolved(String),
}

/// Path-to-view router bound to a navigation history and a mount target.
///
/// `M` is the region views render into. The router only stores it so
/// collaborators can reach it through [`Router::outlet`]; views capture
/// whatever they need themselves.
pub struct Router<H: History, M = ()> {
    routes: HashMap<String, View>,
    fallback: View,
    outlet: M,
    history: H,
    state: RefCell<RouterState>,
}

impl<H, M> Router<H, M>
where
    H: History,
    M: 'static,
{
    /// Build a router and install its link-click and history-pop listeners.
    ///
    /// Nothing is rendered until the first [`Router::resolve`]. For duplicate
    /// paths the last registration wins. Listeners hold a weak reference, so
    /// they go quiet once the returned `Rc` is dropped.
    pub fn new<F>(routes: Vec<Route>, outlet: M, fallback: F, history: H) -> Rc<Self>
    where
        F: Fn() -> Result<(), ViewError> + 'static,
    {
        let routes = routes.into_iter().map(|route| (route.path, route.view)).collect();
        let router = Rc::new(Self {
            routes,
            fallback: Rc::new(fallback),
            outlet,
            history,
            state: RefCell::new(RouterState::Unresolved),
        });
        router.install_listeners();
        router
    }

    fn install_listeners(self: &Rc<Self>) {
        let on_pop = {
            let weak: Weak<Self> = Rc::downgrade(self);
            Rc::new(move || {
                if let Some(router) = weak.upgrade() {
                    if let Err(err) = router.resolve() {
                        log::error!("router: view failed after history pop: {err}");
                    }
                }
            })
        };
        let on_link = {
            let weak: Weak<Self> = Rc::downgrade(self);
            Rc::new(move |href: &str| {
                if let Some(router) = weak.upgrade() {
                    if let Err(err) = router.navigate(href) {
                        log::error!("router: view failed after link to {href}: {err}");
                    }
                }
            })
        };
        self.history.listen(NavigationHandlers { on_pop, on_link });
    }

    /// Match the current location against the route table and run its view,
    /// or the fallback when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns whatever error the invoked view returned.
    pub fn resolve(&self) -> Result<(), ViewError> {
        let path = self.history.current_path();
        let view = match self.routes.get(&path) {
            Some(view) => {
                log::debug!("router: resolved {path}");
                Rc::clone(view)
            }
            None => {
                log::debug!("router: no route for {path:?}, rendering fallback");
                Rc::clone(&self.fallback)
            }
        };
        *self.state.borrow_mut() = RouterState::Resolved(path);
        view()
    }

    /// Push `path` onto the history and resolve it.
    ///
    /// Navigating to the already-active path still re-renders.
    ///
    /// # Errors
    ///
    /// Returns whatever error the invoked view returned.
    pub fn navigate(&self, path: &str) -> Result<(), ViewError> {
        self.history.push(path);
        self.resolve()
    }

    #[must_use]
    pub fn state(&self) -> RouterState {
        self.state.borrow().clone()
    }

    /// Path of the last resolution, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<String> {
        match &*self.state.borrow() {
            RouterState::Unresolved => None,
            RouterState::Resolved(path) => Some(path.clone()),
        }
    }

    #[must_use]
    pub fn has_route(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn outlet(&self) -> &M {
        &self.outlet
    }

    pub fn history(&self) -> &H {
        &self.history
    }
}
