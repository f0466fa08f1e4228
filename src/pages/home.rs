//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="p-6">
            <h1 class="text-2xl font-bold">"Welcome"</h1>
            <p>"Use the navigation to Login or Register."</p>
        </section>
    }
}
