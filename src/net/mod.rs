//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the verb-level HTTP client, `auth` is the session-facing seam
//! over the `/auth` endpoints, `resources` wraps the property/booking/review
//! and admin endpoints, and `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod resources;
pub mod types;
