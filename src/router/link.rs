//! In-app link detection for click interception.
//!
//! Any element carrying [`LINK_ATTRIBUTE`] and an `href` is an in-app link.
//! Clicks land on the innermost element, so the ancestor chain is walked
//! until a link is found.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use std::rc::Rc;

/// Marker attribute for links the router handles.
pub const LINK_ATTRIBUTE: &str = "data-link";

/// Marker attribute for the logout control wired by the navigation bar.
pub const LOGOUT_ATTRIBUTE: &str = "data-logout";

/// An element in a clicked element's ancestor chain.
pub trait LinkNode: Sized {
    fn attribute(&self, name: &str) -> Option<String>;
    fn parent(&self) -> Option<Self>;
}

/// Keyboard modifiers and button of a click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// `MouseEvent.button`; `0` is the primary button.
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickModifiers {
    /// Primary button, no modifiers. Anything else is left to the browser
    /// (new tab, new window, download).
    #[must_use]
    pub fn is_plain(self) -> bool {
        self.button == 0 && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}

/// Walk from `start` up through its ancestors and return the `href` of the
/// first element carrying the link marker and a non-empty `href`.
pub fn find_link_href<N: LinkNode>(start: N) -> Option<String> {
    let mut node = Some(start);
    while let Some(current) = node {
        if current.attribute(LINK_ATTRIBUTE).is_some() {
            if let Some(href) = current.attribute("href").filter(|h| !h.is_empty()) {
                return Some(href);
            }
        }
        node = current.parent();
    }
    None
}

/// The `href` to navigate to if this click should be intercepted.
pub fn intercept<N: LinkNode>(target: N, modifiers: ClickModifiers) -> Option<String> {
    if !modifiers.is_plain() {
        return None;
    }
    find_link_href(target)
}

#[cfg(feature = "csr")]
impl LinkNode for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

/// Detached element tree used by [`super::MemoryHistory::click`].
#[derive(Clone, Debug, Default)]
pub struct MemoryNode {
    attributes: Vec<(String, String)>,
    parent: Option<Rc<MemoryNode>>,
}

impl MemoryNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An anchor carrying the link marker.
    #[must_use]
    pub fn link(href: &str) -> Self {
        Self::new().with_attribute(LINK_ATTRIBUTE, "").with_attribute("href", href)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.retain(|(n, _)| n != name);
        self.attributes.push((name.to_owned(), value.to_owned()));
        self
    }

    /// A new node nested inside `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self { attributes: Vec::new(), parent: Some(Rc::new(self.clone())) }
    }
}

impl LinkNode for MemoryNode {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone())
    }

    fn parent(&self) -> Option<Self> {
        self.parent.as_deref().cloned()
    }
}

impl<'a> LinkNode for &'a MemoryNode {
    fn attribute(&self, name: &str) -> Option<String> {
        <MemoryNode as LinkNode>::attribute(self, name)
    }

    fn parent(&self) -> Option<Self> {
        let node: &'a MemoryNode = *self;
        node.parent.as_deref()
    }
}
