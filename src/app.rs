//! Application shell: wires the router and session store to Leptos views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route views only select a [`Screen`]; the [`App`] component renders the
//! page for the current screen. The navigation bar re-renders on every
//! session change notification through a version signal bumped by a
//! subscription.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::nav::Nav;
use crate::net::api::HttpAuthApi;
use crate::pages::{home::HomePage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage};
use crate::router::{BrowserHistory, Route, Router, ViewError};
use crate::session::{BrowserStorage, SessionStore};

/// Page currently mounted in the content outlet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Nothing resolved yet.
    #[default]
    Blank,
    Home,
    Login,
    Register,
    NotFound,
}

pub type AppSession = SessionStore<BrowserStorage, HttpAuthApi>;
pub type AppRouter = Router<BrowserHistory, RwSignal<Screen>>;

/// Handles every page and component receives.
#[derive(Clone, Copy)]
pub struct AppShell {
    pub session: StoredValue<Rc<AppSession>, LocalStorage>,
    pub router: StoredValue<Rc<AppRouter>, LocalStorage>,
    pub screen: RwSignal<Screen>,
    /// Bumped on every session change notification.
    pub session_version: RwSignal<u64>,
}

impl AppShell {
    /// Navigate, logging view failures (there is no caller to hand them to).
    pub fn navigate(&self, path: &str) {
        self.router.with_value(|router| {
            if let Err(err) = router.navigate(path) {
                log::error!("app: navigation to {path} failed: {err}");
            }
        });
    }
}

fn show(screen: RwSignal<Screen>, target: Screen) -> impl Fn() -> Result<(), ViewError> + 'static {
    move || {
        screen.set(target);
        Ok(())
    }
}

/// Route table and fallback for the shell.
pub fn app_routes(screen: RwSignal<Screen>) -> (Vec<Route>, impl Fn() -> Result<(), ViewError> + 'static) {
    let routes = vec![
        Route::new("/", show(screen, Screen::Home)),
        Route::new("/login", show(screen, Screen::Login)),
        Route::new("/register", show(screen, Screen::Register)),
    ];
    (routes, show(screen, Screen::NotFound))
}

/// Root application component.
#[component]
pub fn App(shell: AppShell) -> impl IntoView {
    let screen = shell.screen;
    view! {
        <Nav shell=shell/>
        <main id="app-content" class="flex-1">
            {move || match screen.get() {
                Screen::Blank => view! { <section class="p-6"></section> }.into_any(),
                Screen::Home => view! { <HomePage/> }.into_any(),
                Screen::Login => view! { <LoginPage shell=shell/> }.into_any(),
                Screen::Register => view! { <RegisterPage shell=shell/> }.into_any(),
                Screen::NotFound => view! { <NotFoundPage/> }.into_any(),
            }}
        </main>
    }
}

/// Browser entry: build the session and router, mount, and render the
/// current location.
pub fn start() {
    crate::util::logging::init();

    let screen = RwSignal::new(Screen::Blank);
    let session_version = RwSignal::new(0_u64);

    let session = AppSession::new(
        BrowserStorage,
        HttpAuthApi::new(crate::net::config::ApiConfig::from_env()),
        crate::util::task::BrowserSpawner,
    );
    session.subscribe(move || session_version.update(|v| *v += 1));

    let (routes, fallback) = app_routes(screen);
    let router = Router::new(routes, screen, fallback, BrowserHistory);

    let shell = AppShell {
        session: StoredValue::new_local(session),
        router: StoredValue::new_local(Rc::clone(&router)),
        screen,
        session_version,
    };

    #[cfg(feature = "csr")]
    leptos::mount::mount_to_body(move || view! { <App shell=shell/> });
    #[cfg(not(feature = "csr"))]
    let _ = shell;

    if let Err(err) = router.resolve() {
        log::error!("app: initial render failed: {err}");
    }
}
