//! Top-level routed pages.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod property_detail;
pub mod register;
pub mod search;
