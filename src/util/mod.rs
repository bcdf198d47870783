//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the session and routing rules stay testable off-browser.

pub mod auth;
pub mod browser;
pub mod search;
pub mod storage;
