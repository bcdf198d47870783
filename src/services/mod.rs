//! Long-lived client services.

pub mod session;
