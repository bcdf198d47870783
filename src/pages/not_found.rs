//! 404 fallback route.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a class="btn" href="/">"Go Home"</a>
        </div>
    }
}
