//! Browser navigation helpers that bypass the client router.

/// Full page load of `path`. Used after logout so no reactive state from the
/// signed-in session survives.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window()
            && let Err(error) = window.location().set_href(path)
        {
            log::warn!("redirect to {path} failed: {error:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("hard redirect skipped off-browser: {path}");
    }
}
