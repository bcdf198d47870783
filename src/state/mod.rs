//! Client-side state models.

pub mod session;
