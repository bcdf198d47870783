//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: wait while the session
//! rehydrates, send anonymous visitors to `/login`, send signed-in users
//! without an allowed role to `/`, otherwise render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
/// Where signed-in users without a permitted role are sent.
pub const HOME_PATH: &str = "/";

/// Outcome of guarding one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still rehydrating: render nothing, redirect nowhere.
    Pending,
    Allow,
    RedirectTo(&'static str),
    /// Authenticated but not permitted.
    Deny,
}

impl GuardDecision {
    /// Path to navigate to, if this decision leaves the page.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::RedirectTo(path) => Some(path),
            Self::Deny => Some(HOME_PATH),
            Self::Pending | Self::Allow => None,
        }
    }
}

/// Decide whether `session` may see a view restricted to `allowed`.
/// An empty `allowed` list admits any authenticated user.
pub fn evaluate(allowed: &[Role], session: &Session) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if !session.is_authenticated() {
        return GuardDecision::RedirectTo(LOGIN_PATH);
    }
    if allowed.is_empty() {
        return GuardDecision::Allow;
    }
    match session.role() {
        Some(role) if allowed.contains(&role) => GuardDecision::Allow,
        _ => GuardDecision::Deny,
    }
}

/// Navigate away whenever `decision` settles on a redirect.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = decision.get().redirect_target() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
