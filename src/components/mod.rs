//! Reusable UI components shared across pages.

pub mod footer;
pub mod navbar;
pub mod property_card;
pub mod protected_route;
