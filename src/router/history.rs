//! Navigation history backends.
//!
//! `BrowserHistory` drives `window.history` and installs real DOM listeners.
//! `MemoryHistory` keeps a back/forward stack in memory and simulates clicks
//! and pops, for native hosts and tests.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::link::{self, ClickModifiers, LinkNode};

/// Callbacks a history backend invokes on navigation events.
#[derive(Clone)]
pub struct NavigationHandlers {
    /// Back/forward moved the history pointer.
    pub on_pop: Rc<dyn Fn()>,
    /// An in-app link was clicked; the default navigation is already prevented.
    pub on_link: Rc<dyn Fn(&str)>,
}

/// Source of the current location and sink for new history entries.
pub trait History: 'static {
    /// Path component of the current location, without query or fragment.
    fn current_path(&self) -> String;

    /// Push a new history entry for `path`. Does not fire pop handlers.
    fn push(&self, path: &str);

    /// Install link-click and pop listeners.
    fn listen(&self, handlers: NavigationHandlers);
}

/// Strip query string and fragment, the way `location.pathname` reports it.
#[must_use]
pub fn path_of(entry: &str) -> &str {
    entry.find(['?', '#']).map_or(entry, |idx| &entry[..idx])
}

// =============================================================================
// MemoryHistory
// =============================================================================

struct MemoryHistoryInner {
    entries: Vec<String>,
    index: usize,
    handlers: Vec<NavigationHandlers>,
}

/// In-memory history stack. Clones share the same stack.
#[derive(Clone)]
pub struct MemoryHistory {
    inner: Rc<RefCell<MemoryHistoryInner>>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryHistoryInner {
                entries: vec![initial.to_owned()],
                index: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Raw current entry, including any query or fragment.
    #[must_use]
    pub fn current_entry(&self) -> String {
        let inner = self.inner.borrow();
        inner.entries[inner.index].clone()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.inner.borrow().index
    }

    /// Move one entry back and fire pop handlers. Returns `false` at the start.
    pub fn back(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.index == 0 {
                return false;
            }
            inner.index -= 1;
        }
        self.fire_pop();
        true
    }

    /// Move one entry forward and fire pop handlers. Returns `false` at the end.
    pub fn forward(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.index + 1 >= inner.entries.len() {
                return false;
            }
            inner.index += 1;
        }
        self.fire_pop();
        true
    }

    /// Simulate a click on `target`. Returns `true` when an in-app link
    /// intercepted it (the browser default would have been prevented).
    pub fn click<N: LinkNode>(&self, target: N, modifiers: ClickModifiers) -> bool {
        let Some(href) = link::intercept(target, modifiers) else {
            return false;
        };
        for handlers in self.handlers() {
            (handlers.on_link)(&href);
        }
        true
    }

    fn handlers(&self) -> Vec<NavigationHandlers> {
        self.inner.borrow().handlers.clone()
    }

    fn fire_pop(&self) {
        for handlers in self.handlers() {
            (handlers.on_pop)();
        }
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        path_of(&self.current_entry()).to_owned()
    }

    fn push(&self, path: &str) {
        let mut inner = self.inner.borrow_mut();
        let next = inner.index + 1;
        inner.entries.truncate(next);
        inner.entries.push(path.to_owned());
        inner.index = next;
    }

    fn listen(&self, handlers: NavigationHandlers) {
        self.inner.borrow_mut().handlers.push(handlers);
    }
}

// =============================================================================
// BrowserHistory
// =============================================================================

/// `window.history` backed navigation.
///
/// Outside the browser (no `csr` feature) the location is always `/`, pushes
/// are dropped, and no listeners are installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "csr"))]
        {
            "/".to_owned()
        }
    }

    fn push(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                return;
            };
            let state = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&state, &"path".into(), &path.into());
            if let Err(err) = history.push_state_with_url(&state, "", Some(path)) {
                log::warn!("router: pushState failed for {path}: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }

    fn listen(&self, handlers: NavigationHandlers) {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(window) = web_sys::window() else {
                return;
            };

            let on_pop = Rc::clone(&handlers.on_pop);
            let pop = Closure::<dyn Fn()>::new(move || on_pop());
            if window
                .add_event_listener_with_callback("popstate", pop.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("router: failed to install popstate listener");
            }
            pop.forget();

            let Some(document) = window.document() else {
                return;
            };
            let on_link = Rc::clone(&handlers.on_link);
            let click = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                    return;
                };
                let modifiers = ClickModifiers {
                    button: ev.button(),
                    ctrl: ev.ctrl_key(),
                    meta: ev.meta_key(),
                    shift: ev.shift_key(),
                    alt: ev.alt_key(),
                };
                if let Some(href) = link::intercept(target, modifiers) {
                    ev.prevent_default();
                    on_link(&href);
                }
            });
            if document
                .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("router: failed to install link click listener");
            }
            click.forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = handlers;
        }
    }
}
