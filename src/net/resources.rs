//! Typed calls for the property, search, booking, review, image and admin
//! endpoints.
//!
//! Each function takes the [`ApiClient`] to use; authenticated calls expect a
//! client carrying the session's bearer token (see
//! `SessionStore::authorized_api`). Single-resource responses arrive wrapped
//! (`{ property }`, `{ booking }`, ...) and list responses as pagination
//! envelopes; both are unwrapped here so pages only see typed values.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{ApiClient, ApiError};
use super::types::{
    Analytics, AvailabilityStatus, Booking, BookingRequest, ListParams, MessageResponse, NearbyParams, Page, Property,
    PropertyRequest, Review, ReviewRequest, Role, SearchParams, User,
};

// =============================================================================
// PROPERTIES
// =============================================================================

/// `GET /properties`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_properties(api: &ApiClient, params: &ListParams) -> Result<Page<Property>, ApiError> {
    let body: Value = api.get_with("/properties", params).await?;
    property_page(body)
}

/// `GET /properties/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_property(api: &ApiClient, id: i64) -> Result<Property, ApiError> {
    let body: Value = api.get(&property_path(id)).await?;
    unwrap_field(body, "property")
}

/// `POST /properties` (owner only).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn create_property(api: &ApiClient, request: &PropertyRequest) -> Result<Property, ApiError> {
    let body: Value = api.post("/properties", request).await?;
    unwrap_field(body, "property")
}

/// `PUT /properties/{id}` (owning owner only).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_property(api: &ApiClient, id: i64, request: &PropertyRequest) -> Result<Property, ApiError> {
    let body: Value = api.put(&property_path(id), request).await?;
    unwrap_field(body, "property")
}

/// `DELETE /properties/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_property(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&property_path(id)).await
}

/// `GET /properties/owner/{owner_id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn owner_properties(api: &ApiClient, owner_id: i64, params: &ListParams) -> Result<Page<Property>, ApiError> {
    let body: Value = api.get_with(&format!("/properties/owner/{owner_id}"), params).await?;
    property_page(body)
}

/// `PATCH /properties/{id}/status`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_property_status(
    api: &ApiClient,
    id: i64,
    status: AvailabilityStatus,
) -> Result<Property, ApiError> {
    let payload = serde_json::json!({ "status": status });
    let body: Value = api.patch(&format!("{}/status", property_path(id)), &payload).await?;
    unwrap_field(body, "property")
}

// =============================================================================
// SEARCH
// =============================================================================

/// `GET /search`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn search_properties(api: &ApiClient, params: &SearchParams) -> Result<Page<Property>, ApiError> {
    let body: Value = api.get_with("/search", params).await?;
    property_page(body)
}

/// `GET /search/nearby`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn search_nearby(api: &ApiClient, params: &NearbyParams) -> Result<Page<Property>, ApiError> {
    let body: Value = api.get_with("/search/nearby", params).await?;
    property_page(body)
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// `POST /bookings` (tenant only).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn create_booking(api: &ApiClient, request: &BookingRequest) -> Result<Booking, ApiError> {
    let body: Value = api.post("/bookings", request).await?;
    unwrap_field(body, "booking")
}

/// `GET /bookings/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_booking(api: &ApiClient, id: i64) -> Result<Booking, ApiError> {
    let body: Value = api.get(&booking_path(id)).await?;
    unwrap_field(body, "booking")
}

/// Owner-side and tenant-side booking state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingAction {
    Approve,
    Reject,
    Cancel,
}

impl BookingAction {
    fn segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Cancel => "cancel",
        }
    }
}

/// `PATCH /bookings/{id}/{approve|reject|cancel}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn transition_booking(api: &ApiClient, id: i64, action: BookingAction) -> Result<Booking, ApiError> {
    let body: Value = api.patch_empty(&format!("{}/{}", booking_path(id), action.segment())).await?;
    unwrap_field(body, "booking")
}

/// Approve a pending booking (owner).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn approve_booking(api: &ApiClient, id: i64) -> Result<Booking, ApiError> {
    transition_booking(api, id, BookingAction::Approve).await
}

/// Reject a pending booking (owner).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn reject_booking(api: &ApiClient, id: i64) -> Result<Booking, ApiError> {
    transition_booking(api, id, BookingAction::Reject).await
}

/// Cancel a booking (tenant).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn cancel_booking(api: &ApiClient, id: i64) -> Result<Booking, ApiError> {
    transition_booking(api, id, BookingAction::Cancel).await
}

/// `GET /bookings/tenant/{tenant_id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn tenant_bookings(api: &ApiClient, tenant_id: i64, params: &ListParams) -> Result<Page<Booking>, ApiError> {
    let body: Value = api.get_with(&format!("/bookings/tenant/{tenant_id}"), params).await?;
    page_of(body, "bookings", "totalBookings")
}

/// `GET /bookings/owner/{owner_id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn owner_bookings(api: &ApiClient, owner_id: i64, params: &ListParams) -> Result<Page<Booking>, ApiError> {
    let body: Value = api.get_with(&format!("/bookings/owner/{owner_id}"), params).await?;
    page_of(body, "bookings", "totalBookings")
}

// =============================================================================
// REVIEWS
// =============================================================================

/// `POST /reviews`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn submit_review(api: &ApiClient, request: &ReviewRequest) -> Result<Review, ApiError> {
    let body: Value = api.post("/reviews", request).await?;
    unwrap_field(body, "review")
}

/// `GET /reviews/property/{property_id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn property_reviews(
    api: &ApiClient,
    property_id: i64,
    params: &ListParams,
) -> Result<Page<Review>, ApiError> {
    let body: Value = api.get_with(&format!("/reviews/property/{property_id}"), params).await?;
    page_of(body, "reviews", "totalReviews")
}

/// `PUT /reviews/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_review(api: &ApiClient, id: i64, request: &ReviewRequest) -> Result<Review, ApiError> {
    let body: Value = api.put(&format!("/reviews/{id}"), request).await?;
    unwrap_field(body, "review")
}

/// `DELETE /reviews/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_review(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/reviews/{id}")).await
}

// =============================================================================
// IMAGES
// =============================================================================

/// `DELETE /images/{filename}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_image(api: &ApiClient, filename: &str) -> Result<(), ApiError> {
    api.delete(&image_path(filename)).await
}

// =============================================================================
// ADMIN
// =============================================================================

/// `GET /admin/users`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_users(api: &ApiClient, params: &ListParams) -> Result<Page<User>, ApiError> {
    let body: Value = api.get_with("/admin/users", params).await?;
    page_of(body, "users", "totalUsers")
}

/// `DELETE /admin/users/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_user(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/admin/users/{id}")).await
}

/// `PATCH /admin/users/{id}/role`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_user_role(api: &ApiClient, id: i64, role: Role) -> Result<User, ApiError> {
    let payload = serde_json::json!({ "role": role });
    let body: Value = api.patch(&format!("/admin/users/{id}/role"), &payload).await?;
    unwrap_field(body, "user")
}

/// `GET /admin/properties/pending`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn pending_properties(api: &ApiClient, params: &ListParams) -> Result<Page<Property>, ApiError> {
    let body: Value = api.get_with("/admin/properties/pending", params).await?;
    property_page(body)
}

/// `PATCH /admin/properties/{id}/verify`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn verify_property(api: &ApiClient, id: i64) -> Result<Property, ApiError> {
    let body: Value = api.patch_empty(&format!("/admin/properties/{id}/verify")).await?;
    unwrap_field(body, "property")
}

/// `GET /admin/analytics`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn analytics(api: &ApiClient) -> Result<Analytics, ApiError> {
    api.get("/admin/analytics").await
}

// =============================================================================
// PASSWORD RESET
// =============================================================================

/// `POST /auth/reset-password-request`. Returns the backend's message.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn request_password_reset(api: &ApiClient, email: &str) -> Result<String, ApiError> {
    let payload = serde_json::json!({ "email": email });
    let body: MessageResponse = api.post("/auth/reset-password-request", &payload).await?;
    Ok(body.message)
}

/// `POST /auth/reset-password`. Returns the backend's message.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn reset_password(api: &ApiClient, reset_token: &str, new_password: &str) -> Result<String, ApiError> {
    let payload = serde_json::json!({ "resetToken": reset_token, "newPassword": new_password });
    let body: MessageResponse = api.post("/auth/reset-password", &payload).await?;
    Ok(body.message)
}

// =============================================================================
// HELPERS
// =============================================================================

fn property_path(id: i64) -> String {
    format!("/properties/{id}")
}

fn booking_path(id: i64) -> String {
    format!("/bookings/{id}")
}

fn image_path(filename: &str) -> String {
    format!("/images/{}", urlencoding::encode(filename))
}

fn property_page(body: Value) -> Result<Page<Property>, ApiError> {
    page_of(body, "properties", "totalProperties")
}

fn page_of<T: DeserializeOwned>(body: Value, items_key: &str, total_key: &str) -> Result<Page<T>, ApiError> {
    Page::from_envelope(body, items_key, total_key).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Take `key` out of a `{ key: ... }` response envelope.
fn unwrap_field<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, ApiError> {
    let Some(value) = body.get_mut(key) else {
        return Err(ApiError::Decode(format!("response is missing `{key}`")));
    };
    serde_json::from_value(value.take()).map_err(|e| ApiError::Decode(e.to_string()))
}
