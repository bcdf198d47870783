//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and role-dependent rendering. The session store owns the
//! authoritative copy; the UI reads clones published through a signal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// Current user, persisted token, and whether initialization is in flight.
///
/// `user` being present implies `token` is present. `loading` is true only
/// before the first profile check completes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Session {
    /// Freshly constructed state: token read from storage, profile unresolved.
    pub fn rehydrating(token: Option<String>) -> Self {
        Self { user: None, token, loading: true }
    }

    /// True iff a token is held. A token whose profile check is still pending
    /// counts as authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    pub fn is_owner(&self) -> bool {
        self.has_role(Role::Owner)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_tenant(&self) -> bool {
        self.has_role(Role::Tenant)
    }

    /// Name shown in the navbar: username, else email.
    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        if user.username.is_empty() { Some(user.email.as_str()) } else { Some(user.username.as_str()) }
    }
}
