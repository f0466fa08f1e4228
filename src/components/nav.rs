//! Site navigation bar.
//!
//! Re-renders whenever the session changes. Links carry the router's link
//! marker so clicks stay in-app; the logout control clears the session and
//! always navigates home, even when already there.

use leptos::prelude::*;

use crate::app::AppShell;

/// Greeting shown next to the signed-in user's avatar.
#[must_use]
pub fn signed_in_label(name: Option<&str>) -> String {
    format!("Signed in as {}", name.filter(|n| !n.is_empty()).unwrap_or("User"))
}

#[component]
pub fn Nav(shell: AppShell) -> impl IntoView {
    let session = shell.session;
    let version = shell.session_version;

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        session.with_value(|s| s.clear_auth());
        shell.navigate("/");
    };

    view! {
        <nav id="site-nav">
            {move || {
                version.track();
                let state = session.with_value(|s| s.snapshot());
                if state.is_authenticated() {
                    let label = signed_in_label(state.name.as_deref());
                    let avatar = state
                        .avatar_url
                        .map(|url| view! { <img class="h-8 w-8 rounded-full" src=url alt=""/> });
                    view! {
                        <div class="p-4 bg-gray-800 text-white flex gap-4 items-center">
                            <a href="/" data-link="" class="font-semibold">"Home"</a>
                            {avatar}
                            <span class="opacity-80">{label}</span>
                            <a href="#" data-logout="" class="ml-auto underline" on:click=on_logout>
                                "Logout"
                            </a>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="p-4 bg-gray-800 text-white flex gap-4">
                            <a href="/login" data-link="">"Login"</a>
                            <a href="/register" data-link="">"Register"</a>
                        </div>
                    }
                    .into_any()
                }
            }}
        </nav>
    }
}
