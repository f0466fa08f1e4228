use std::cell::Cell;

use super::*;
use crate::router::MemoryNode;

fn counting_handlers(pops: &Rc<Cell<usize>>, links: &Rc<RefCell<Vec<String>>>) -> NavigationHandlers {
    let pops = Rc::clone(pops);
    let links = Rc::clone(links);
    NavigationHandlers {
        on_pop: Rc::new(move || pops.set(pops.get() + 1)),
        on_link: Rc::new(move |href: &str| links.borrow_mut().push(href.to_owned())),
    }
}

// =============================================================================
// path_of
// =============================================================================

#[test]
fn path_of_strips_query_and_fragment() {
    assert_eq!(path_of("/login?next=/"), "/login");
    assert_eq!(path_of("/login#form"), "/login");
    assert_eq!(path_of("/a#b?c"), "/a");
    assert_eq!(path_of("/plain"), "/plain");
    assert_eq!(path_of(""), "");
}

// =============================================================================
// MemoryHistory
// =============================================================================

#[test]
fn default_starts_at_root() {
    let history = MemoryHistory::default();
    assert_eq!(history.current_path(), "/");
    assert_eq!(history.entry_count(), 1);
}

#[test]
fn push_moves_pointer_without_firing_pop() {
    let pops = Rc::new(Cell::new(0));
    let links = Rc::default();
    let history = MemoryHistory::new("/");
    history.listen(counting_handlers(&pops, &links));

    history.push("/login");
    assert_eq!(history.current_path(), "/login");
    assert_eq!(history.index(), 1);
    assert_eq!(pops.get(), 0);
}

#[test]
fn push_after_back_drops_forward_entries() {
    let history = MemoryHistory::new("/");
    history.push("/a");
    history.push("/b");
    assert!(history.back());
    history.push("/c");
    assert_eq!(history.entry_count(), 3);
    assert!(!history.forward());
    assert_eq!(history.current_path(), "/c");
}

#[test]
fn back_and_forward_fire_pop_and_stop_at_edges() {
    let pops = Rc::new(Cell::new(0));
    let links = Rc::default();
    let history = MemoryHistory::new("/");
    history.listen(counting_handlers(&pops, &links));
    history.push("/login");

    assert!(history.back());
    assert!(!history.back());
    assert!(history.forward());
    assert!(!history.forward());
    assert_eq!(pops.get(), 2);
    assert_eq!(history.current_path(), "/login");
}

#[test]
fn clones_share_the_stack() {
    let history = MemoryHistory::new("/");
    let other = history.clone();
    other.push("/register");
    assert_eq!(history.current_path(), "/register");
}

#[test]
fn click_reports_link_href_to_handlers() {
    let pops = Rc::new(Cell::new(0));
    let links = Rc::new(RefCell::new(Vec::new()));
    let history = MemoryHistory::new("/");
    history.listen(counting_handlers(&pops, &links));

    assert!(history.click(MemoryNode::link("/login").child(), ClickModifiers::default()));
    assert_eq!(*links.borrow(), vec!["/login".to_owned()]);
    // The handler decides whether to push; a bare click does not.
    assert_eq!(history.entry_count(), 1);
}

// =============================================================================
// BrowserHistory (non-browser fallback)
// =============================================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_history_outside_browser_stays_at_root() {
    let history = BrowserHistory;
    history.push("/login");
    assert_eq!(history.current_path(), "/");
}
