//! Login page: email + password against the auth API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppShell;
use crate::net::types::LoginRequest;

/// Trim and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest::new(email, password))
}

#[component]
pub fn LoginPage(shell: AppShell) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let session = shell.session.get_value();
        leptos::task::spawn_local(async move {
            match session.login_account(&request).await {
                Ok(_) => {
                    session.log_summary();
                    info.set(String::new());
                    shell.navigate("/");
                }
                Err(err) => info.set(format!("Login failed: {err}")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="p-6">
            <h1 class="text-2xl font-bold">"Login"</h1>
            <form id="loginForm" class="flex flex-col gap-2 max-w-sm" on:submit=on_submit>
                <input
                    name="email"
                    type="email"
                    placeholder="you@stud.noroff.no"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    name="password"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Login"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="mt-2">{move || info.get()}</p>
            </Show>
        </section>
    }
}
