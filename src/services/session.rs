//! Session store: the single owner of the authentication lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at application start, initialized once, then driven by
//! login / register / refresh / logout from the view layer. It is the only
//! writer of the persisted `token` and `refreshToken` keys. The UI reads
//! cloned [`Session`] snapshots; it never mutates session state directly.
//!
//! DESIGN
//! ======
//! - initialize / login / register / refresh are serialized through an
//!   async mutex, so overlapping logins resolve in call order.
//! - Logout and dispose never wait on that mutex. They clear memory and both
//!   keys synchronously, then bump the sign-out epoch.
//! - Every commit re-checks the epoch under the state lock. A request that
//!   started before a sign-out can never write after it.
//! - The in-memory session sits behind a plain mutex that is never held
//!   across an `.await`.
//!
//! `dispose` is exposed for embedders and tests; the browser app signs out
//! through `logout`. Refresh runs from [`SessionStore::authorized`] when a
//! resource call comes back 401.
//!
//! ERROR HANDLING
//! ==============
//! Expected failures never escape as errors from `initialize` or `logout`:
//! they become state transitions plus a log line. Credential failures from
//! `login` / `register` / `refresh` are returned as [`AuthFailure`] carrying
//! user-facing text.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::net::api::{ApiClient, ApiError};
use crate::net::auth::AuthApi;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::state::session::Session;
use crate::util::storage::TokenStorage;

/// Storage key for the access token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const SESSION_EXPIRED: &str = "Session expired";

/// A failed credential exchange, with the message to show the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Backend `message` when present, else `fallback`.
    pub fn from_api(error: &ApiError, fallback: &str) -> Self {
        Self::new(error.user_message(fallback))
    }
}

/// `Ok(())` on success; the failure carries display text.
pub type AuthOutcome = Result<(), AuthFailure>;

/// Authentication lifecycle over an [`AuthApi`] backend and a
/// [`TokenStorage`] for the two persisted keys.
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    state: Mutex<Session>,
    /// Bumped on every sign-out, only while `state` is locked.
    epoch: AtomicU64,
    mutation: futures::lock::Mutex<()>,
    initialized: AtomicBool,
}

impl<A, S> SessionStore<A, S>
where
    A: AuthApi,
    S: TokenStorage,
{
    /// Build the store from persisted storage. The session starts in the
    /// loading state until [`SessionStore::initialize`] resolves it.
    pub fn new(api: A, storage: S) -> Self {
        let token = storage.get(TOKEN_KEY);
        Self {
            api,
            storage,
            state: Mutex::new(Session::rehydrating(token)),
            epoch: AtomicU64::new(0),
            mutation: futures::lock::Mutex::new(()),
            initialized: AtomicBool::new(false),
        }
    }

    /// Cloned view of the current session.
    pub fn snapshot(&self) -> Session {
        self.lock_state().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock_state().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock_state().is_authenticated()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Resolve the persisted token into a user. Runs at most once; later
    /// calls, and calls after a login already established a session, return
    /// immediately.
    pub async fn initialize(&self) {
        let epoch = self.epoch();
        let _serial = self.mutation.lock().await;
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }

        let Some(token) = self.token() else {
            log::debug!("session: no persisted token, starting anonymous");
            self.lock_state().loading = false;
            return;
        };

        match self.api.profile(&token).await {
            Ok(user) => {
                let mut state = self.lock_state();
                if self.epoch() != epoch || state.token.as_deref() != Some(token.as_str()) {
                    log::debug!("session: signed out during restore, discarding profile");
                    return;
                }
                log::info!("session: restored user_id={} role={}", user.id, user.role);
                state.user = Some(user);
                state.loading = false;
            }
            Err(error) => {
                if self.clear_if_current(epoch) {
                    log::warn!("session: persisted token rejected, clearing: {error}");
                }
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// The backend's message, or `"Login failed"`, also returned when a
    /// logout landed while the request was in flight. Session state is
    /// unchanged on failure.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let epoch = self.epoch();
        let _serial = self.mutation.lock().await;
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        match self.api.login(&request).await {
            Ok(response) => {
                if self.establish(epoch, response) {
                    Ok(())
                } else {
                    Err(AuthFailure::new(LOGIN_FAILED))
                }
            }
            Err(error) => {
                log::info!("session: login rejected: {error}");
                Err(AuthFailure::from_api(&error, LOGIN_FAILED))
            }
        }
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// The backend's message, or `"Registration failed"`. Session state is
    /// unchanged on failure.
    pub async fn register(&self, request: &RegisterRequest) -> AuthOutcome {
        let epoch = self.epoch();
        let _serial = self.mutation.lock().await;
        match self.api.register(request).await {
            Ok(response) => {
                if self.establish(epoch, response) {
                    Ok(())
                } else {
                    Err(AuthFailure::new(REGISTRATION_FAILED))
                }
            }
            Err(error) => {
                log::info!("session: registration rejected: {error}");
                Err(AuthFailure::from_api(&error, REGISTRATION_FAILED))
            }
        }
    }

    /// Trade the persisted refresh token for a new token pair.
    ///
    /// # Errors
    ///
    /// `"Session expired"` when no refresh token is held, otherwise the
    /// backend's message. A backend rejection signs the session out; a
    /// transport failure leaves it as is.
    pub async fn refresh(&self) -> AuthOutcome {
        let epoch = self.epoch();
        let _serial = self.mutation.lock().await;
        let Some(refresh_token) = self.storage.get(REFRESH_TOKEN_KEY) else {
            log::info!("session: refresh requested without refresh token");
            self.clear_if_current(epoch);
            return Err(AuthFailure::new(SESSION_EXPIRED));
        };

        match self.api.refresh(&refresh_token).await {
            Ok(response) => {
                if self.establish(epoch, response) {
                    Ok(())
                } else {
                    Err(AuthFailure::new(SESSION_EXPIRED))
                }
            }
            Err(error @ ApiError::Network(_)) => {
                log::warn!("session: refresh unreachable, keeping session: {error}");
                Err(AuthFailure::from_api(&error, SESSION_EXPIRED))
            }
            Err(error) => {
                log::warn!("session: refresh rejected, clearing: {error}");
                self.clear_if_current(epoch);
                Err(AuthFailure::from_api(&error, SESSION_EXPIRED))
            }
        }
    }

    /// Sign out. Local state and both persisted keys are cleared before the
    /// first `.await`, without waiting on in-flight requests. The backend is
    /// then notified best-effort.
    pub async fn logout(&self) {
        match self.sign_out_local() {
            Some(token) => {
                if let Err(error) = self.api.logout(&token).await {
                    log_logout_failure(&error);
                }
            }
            None => log::debug!("session: logout without token, skipping notify"),
        }
    }

    /// Drop local session state without contacting the backend.
    pub fn dispose(&self) {
        self.sign_out_local();
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Commit a token pair unless a sign-out happened since `epoch`.
    fn establish(&self, epoch: u64, response: AuthResponse) -> bool {
        let AuthResponse { token, refresh_token, user } = response;
        let mut state = self.lock_state();
        if self.epoch() != epoch {
            log::info!("session: signed out while request was in flight, discarding user_id={}", user.id);
            return false;
        }
        self.storage.set(TOKEN_KEY, &token);
        match refresh_token.as_deref() {
            Some(refresh) => self.storage.set(REFRESH_TOKEN_KEY, refresh),
            None => self.storage.remove(REFRESH_TOKEN_KEY),
        }
        log::info!("session: signed in user_id={} role={}", user.id, user.role);
        *state = Session { user: Some(user), token: Some(token), loading: false };
        self.initialized.store(true, Ordering::SeqCst);
        true
    }

    /// Clear unless a sign-out already happened since `epoch`.
    fn clear_if_current(&self, epoch: u64) -> bool {
        let mut state = self.lock_state();
        if self.epoch() != epoch {
            return false;
        }
        self.clear_storage();
        *state = Session::default();
        true
    }

    /// Clear everything and invalidate in-flight requests. Returns the token
    /// that was held.
    fn sign_out_local(&self) -> Option<String> {
        let mut state = self.lock_state();
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.clear_storage();
        let token = std::mem::take(&mut *state).token;
        log::info!("session: signed out");
        token
    }

    fn clear_storage(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    fn lock_state(&self) -> MutexGuard<'_, Session> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: TokenStorage> SessionStore<ApiClient, S> {
    /// API client carrying the current bearer token, if any.
    pub fn authorized_api(&self) -> ApiClient {
        match self.token() {
            Some(token) => self.api.with_bearer(&token),
            None => self.api.clone(),
        }
    }

    /// Run `call` with the current bearer token. A 401 on a signed-in
    /// session triggers one [`SessionStore::refresh`] and a single retry
    /// with the rotated token.
    ///
    /// # Errors
    ///
    /// The call's own error. When the refresh fails the original 401 is
    /// returned.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> Result<T, ApiError>
    where
        F: Fn(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let signed_in = self.token().is_some();
        match call(self.authorized_api()).await {
            Err(error) if signed_in && error.is_unauthorized() => {
                if let Err(failure) = self.refresh().await {
                    log::info!("session: retry skipped, refresh failed: {failure}");
                    return Err(error);
                }
                call(self.authorized_api()).await
            }
            outcome => outcome,
        }
    }
}

/// Network failures warn, 401/403 log at info, anything else is an error.
fn log_logout_failure(error: &ApiError) {
    match error {
        ApiError::Network(_) => log::warn!("session: logout notify unreachable: {error}"),
        ApiError::Status { status: 401 | 403, .. } => log::info!("session: logout notify token already invalid: {error}"),
        _ => log::error!("session: logout notify failed: {error}"),
    }
}
