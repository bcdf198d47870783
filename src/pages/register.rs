//! Account registration for tenants and owners.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::net::types::{RegisterRequest, Role};
use crate::pages::login::looks_like_email;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Roles a visitor may pick when signing up.
pub const SIGNUP_ROLES: [Role; 2] = [Role::Tenant, Role::Owner];

/// Raw form values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub phone: String,
}

/// Validate the form into a registration payload.
///
/// # Errors
///
/// A user-facing validation message.
pub fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Username, email and password are required.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.");
    }
    let role = match form.role.trim() {
        "" => Role::Tenant,
        raw => match raw.parse::<Role>() {
            Ok(role) if SIGNUP_ROLES.contains(&role) => role,
            _ => return Err("Choose tenant or owner."),
        },
    };
    let phone = form.phone.trim();

    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role: Some(role),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(RegisterForm { role: Role::Tenant.as_str().to_owned(), ..RegisterForm::default() });
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(role) = session.get().role() {
            navigate(role.dashboard_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(failure) = session.register(request).await {
                error.set(Some(failure.message));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        log::debug!("register submit ignored off-browser: {}", request.email);
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || get(&form.get())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                {field("Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                {field("you@example.com", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                {field("Confirm password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                {field("Phone (optional)", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                <select
                    class="auth-input"
                    prop:value=move || form.get().role
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.role = value);
                    }
                >
                    {SIGNUP_ROLES
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{format!("I am a {}", role.as_str())}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-card__switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
