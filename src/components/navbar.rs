//! Top navigation bar.
//!
//! Anonymous visitors get login and sign-up links; signed-in users get their
//! role dashboard and a logout button. Logout ends with a full page load so no
//! signed-in reactive state outlives the session.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::app::use_session;
use crate::net::types::Role;

/// Dashboard link target for the signed-in role. Defaults to the tenant
/// dashboard while the profile is still resolving.
pub fn dashboard_href(role: Option<Role>) -> &'static str {
    role.unwrap_or(Role::Tenant).dashboard_path()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let state = session.state();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            session.logout().await;
            crate::util::browser::hard_redirect(crate::util::auth::HOME_PATH);
        });
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"RentIt"</a>
            <div class="navbar__links">
                <a href="/search">"Browse Properties"</a>
                <Show when=move || state.get().is_owner()>
                    <a href="/owner/dashboard">"My Properties"</a>
                </Show>
                <Show when=move || state.get().is_admin()>
                    <a href="/admin/dashboard">"Admin Dashboard"</a>
                </Show>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || state.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login">"Login"</a>
                            <a class="navbar__cta" href="/register">"Sign Up"</a>
                        }
                    }
                >
                    <span class="navbar__user">
                        {move || state.get().display_name().map(str::to_owned).unwrap_or_default()}
                    </span>
                    <a href=move || dashboard_href(state.get().role())>"Dashboard"</a>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
