//! Registration page. Registering does not sign the user in; success moves
//! on to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::app::AppShell;
use crate::net::types::RegisterRequest;

/// Minimum password length accepted by the auth API.
pub(crate) const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter name, email and password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        ..RegisterRequest::default()
    })
}

#[component]
pub fn RegisterPage(shell: AppShell) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let session = shell.session.get_value();
        leptos::task::spawn_local(async move {
            match session.register_account(&request).await {
                Ok(_) => {
                    info.set(String::new());
                    shell.navigate("/login");
                }
                Err(err) => info.set(format!("Registration failed: {err}")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="p-6">
            <h1 class="text-2xl font-bold">"Register"</h1>
            <form id="registerForm" class="flex flex-col gap-2 max-w-sm" on:submit=on_submit>
                <input
                    name="name"
                    type="text"
                    placeholder="Username"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                <button type="submit" disabled=move || busy.get()>"Register"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="mt-2">{move || info.get()}</p>
            </Show>
        </section>
    }
}
