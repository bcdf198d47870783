//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields default
//! so partially populated payloads (e.g. a bare `{ id, role }` user) still
//! decode. Roles are matched case-insensitively on the way in and sent as
//! the backend's Java enum names (`TENANT`) on the way out.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// ROLES
// =============================================================================

/// Account role. Drives dashboard routing and route-guard decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Tenant,
    Owner,
    Admin,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Role::Tenant, Role::Owner, Role::Admin];

    /// Lowercase name, as used in routes and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Owner => "owner",
            Self::Admin => "admin",
        }
    }

    /// Uppercase name accepted by the backend.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Tenant => "TENANT",
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
        }
    }

    /// Landing route for this role's dashboard.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Tenant => "/tenant/dashboard",
            Self::Owner => "/owner/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Owner => "Owner",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role string does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "tenant" => Ok(Self::Tenant),
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownRole(raw.to_owned())),
        }
    }
}

impl Serialize for Role {
    /// The backend binds roles to a Java enum, so the wire form is uppercase.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

// =============================================================================
// USERS + AUTH PAYLOADS
// =============================================================================

/// An account as returned by `/auth/profile`, `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub username: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Contact phone, if provided at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Requested role; the backend defaults to tenant when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of `POST /auth/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair plus identity returned by login, register and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for authenticated calls.
    pub token: String,
    /// Opaque token accepted by `/auth/refresh`.
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// `{ user }` envelope of `GET /auth/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// `{ message }` body used by informational endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shape; only `message` is used for user-facing text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Listing category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Studio,
    Room,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] =
        [PropertyType::Apartment, PropertyType::House, PropertyType::Villa, PropertyType::Studio, PropertyType::Room];

    /// Uppercase wire name, as used in query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "APARTMENT",
            Self::House => "HOUSE",
            Self::Villa => "VILLA",
            Self::Studio => "STUDIO",
            Self::Room => "ROOM",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Studio => "Studio",
            Self::Room => "Room",
        }
    }
}

/// Returned when a property-type string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property type: {0:?}")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let upper = raw.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == upper)
            .ok_or_else(|| UnknownPropertyType(raw.to_owned()))
    }
}

/// Listing availability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AvailabilityStatus {
    Available,
    Rented,
    #[default]
    Draft,
}

/// Image attached to a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    #[serde(default)]
    pub id: Option<i64>,
    /// Server-relative (`/uploads/...`) or absolute URL.
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// A rental listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    #[serde(default)]
    pub owner: Option<User>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub property_type: PropertyType,
    /// Monthly rent.
    pub rent_amount: f64,
    #[serde(default)]
    pub deposit: Option<f64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area_sqft: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub availability_status: AvailabilityStatus,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Property {
    /// URL of the image flagged primary, else the first image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
            .map(|image| image.url.as_str())
    }
}

/// Create/update body for `/properties`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub rent_amount: f64,
    pub deposit: f64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_sqft: Option<f64>,
    pub amenities: Vec<String>,
}

// =============================================================================
// BOOKINGS + REVIEWS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

/// A tenant's booking request against a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub property: Option<Property>,
    #[serde(default)]
    pub tenant: Option<User>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub booking_status: BookingStatus,
    /// ISO date (`YYYY-MM-DD`).
    pub check_in_date: String,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub property_id: i64,
    pub check_in_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A tenant review of a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub property_id: Option<i64>,
    /// Review author.
    #[serde(default, alias = "tenant")]
    pub user: Option<User>,
    /// 1..=5.
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub property_id: i64,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Sort direction for list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Paging parameters accepted by every list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Zero-based page index.
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl ListParams {
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        Self { page, limit, sort_by: None, order: None }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::page(0, 10)
    }
}

/// Normalized pagination envelope.
///
/// The backend names the item array and total after the resource
/// (`properties` / `totalProperties`, `bookings` / `totalBookings`, ...);
/// [`Page::from_envelope`] maps those onto fixed fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based index of this page.
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn empty() -> Self {
        Self { items: Vec::new(), current_page: 0, total_pages: 0, total_count: 0 }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a list envelope whose items sit under `items_key` and whose
    /// element count sits under `total_key`. Missing counters read as zero;
    /// a missing item array reads as empty.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the item array does not decode as `T`.
    pub fn from_envelope(
        mut body: serde_json::Value,
        items_key: &str,
        total_key: &str,
    ) -> Result<Self, serde_json::Error> {
        let items = match body.get_mut(items_key) {
            Some(value) => serde_json::from_value(value.take())?,
            None => Vec::new(),
        };
        Ok(Self {
            items,
            current_page: read_count(&body, "currentPage"),
            total_pages: read_count(&body, "totalPages"),
            total_count: read_count(&body, total_key),
        })
    }
}

fn read_count(body: &serde_json::Value, key: &str) -> u64 {
    body.get(key).and_then(serde_json::Value::as_u64).unwrap_or(0)
}

// =============================================================================
// SEARCH + ADMIN
// =============================================================================

/// Query parameters for `GET /search`. Unset filters are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    pub page: u32,
    pub limit: u32,
}

/// Query parameters for `GET /search/nearby`; `radius` is in kilometres.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearbyParams {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub owners: u64,
    #[serde(default)]
    pub tenants: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PropertyCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub available: u64,
    #[serde(default)]
    pub rented: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BookingCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub rejected: u64,
    #[serde(default)]
    pub cancelled: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewCounts {
    #[serde(default)]
    pub total: u64,
}

/// Marketplace totals from `GET /admin/analytics`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub users: UserCounts,
    #[serde(default)]
    pub properties: PropertyCounts,
    #[serde(default)]
    pub bookings: BookingCounts,
    #[serde(default)]
    pub reviews: ReviewCounts,
}
