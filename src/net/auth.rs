//! Session-facing seam over the backend `/auth` endpoints.
//!
//! The session store depends on [`AuthApi`] rather than on [`ApiClient`]
//! directly so its lifecycle can be exercised against a mock backend.

use super::api::{ApiClient, ApiError};
use super::types::{AuthResponse, LoginRequest, ProfileResponse, RefreshRequest, RegisterRequest, User};

pub const PROFILE_PATH: &str = "/auth/profile";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Backend operations the session store needs.
///
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Resolve the user owning `token` (`GET /auth/profile`).
    ///
    /// # Errors
    ///
    /// Any non-2xx response or transport failure.
    async fn profile(&self, token: &str) -> Result<User, ApiError>;

    /// Exchange credentials for a token pair (`POST /auth/login`).
    ///
    /// # Errors
    ///
    /// Rejected credentials surface as [`ApiError::Status`].
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Create an account and sign in (`POST /auth/register`).
    ///
    /// # Errors
    ///
    /// Validation and conflict failures surface as [`ApiError::Status`].
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Tell the backend the session ended (`POST /auth/logout`).
    ///
    /// # Errors
    ///
    /// Any non-2xx response or transport failure.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    /// Trade a refresh token for a new pair (`POST /auth/refresh`).
    ///
    /// # Errors
    ///
    /// An invalid or revoked refresh token surfaces as [`ApiError::Status`].
    async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        let body: ProfileResponse = self.with_bearer(token).get(PROFILE_PATH).await?;
        Ok(body.user)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post(REGISTER_PATH, request).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.with_bearer(token).post_unit(LOGOUT_PATH).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, ApiError> {
        let request = RefreshRequest { refresh_token: refresh_token.to_owned() };
        self.post(REFRESH_PATH, &request).await
    }
}
