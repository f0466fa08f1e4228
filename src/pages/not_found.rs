//! Fallback page for unmatched paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="p-6">
            <h1 class="text-xl font-bold">"404 - Page not found"</h1>
        </section>
    }
}
