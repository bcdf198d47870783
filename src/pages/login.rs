//! Email + password sign-in.
//!
//! On success the page waits for the published session and sends the user to
//! their role dashboard. Failures show the message the session store returns.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;

/// Trimmed `(email, password)` or the message to show.
///
/// # Errors
///
/// A user-facing validation message.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// `local@domain` with a dot in the domain.
pub fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if let Some(role) = state.role() {
            navigate(role.dashboard_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(failure) = session.login(email_value, password_value).await {
                error.set(Some(failure.message));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        log::debug!("login submit ignored off-browser: {email_value} ({} chars)", password_value.len());
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in to RentIt"</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-card__switch">
                    "No account? " <a href="/register">"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
