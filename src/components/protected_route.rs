//! Role-gated wrapper for protected routes.
//!
//! Renders nothing while the session rehydrates, then either renders its
//! children or navigates away as [`evaluate`] decides.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::net::types::Role;
use crate::util::auth::{GuardDecision, evaluate, install_guard_redirect};

#[component]
pub fn ProtectedRoute(
    /// Roles allowed to see the children. Empty admits any signed-in user.
    roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| evaluate(&roles, &session.get()));
    install_guard_redirect(decision, use_navigate());

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="route-guard">
                        <Show when=move || decision.get() == GuardDecision::Pending>
                            <p class="route-guard__pending">"Loading..."</p>
                        </Show>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
