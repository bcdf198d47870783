//! Client configuration: backend API and image host base URLs.
//!
//! Values resolve from the runtime environment first (native builds and
//! tests), then from variables captured at compile time (WASM builds have no
//! process environment), then from local-development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_VAR: &str = "RENTIT_API_URL";
pub const IMAGE_BASE_URL_VAR: &str = "RENTIT_IMAGE_BASE_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:5000";

/// Errors raised while resolving [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configured base URL is not an absolute http(s) URL.
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base for every REST call, without a trailing slash.
    pub api_base_url: String,
    /// Host serving uploaded listing images, without a trailing slash.
    pub image_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_URL.to_owned(), image_base_url: DEFAULT_IMAGE_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from `RENTIT_API_URL` and `RENTIT_IMAGE_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if a set value is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| runtime_var(var).or_else(|| compiled_var(var)))
    }

    /// Build config from an arbitrary variable lookup. Unset or blank values
    /// fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if a set value is not http(s).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = resolve_url(&lookup, API_URL_VAR, DEFAULT_API_URL)?;
        let image_base_url = resolve_url(&lookup, IMAGE_BASE_URL_VAR, DEFAULT_IMAGE_BASE_URL)?;
        Ok(Self { api_base_url, image_base_url })
    }

    /// Absolute URL for a listing image.
    ///
    /// Absolute URLs pass through, server-relative paths are prefixed with the
    /// image host, and bare filenames resolve under `/uploads/`.
    #[must_use]
    pub fn image_url(&self, path: &str) -> String {
        if is_http_url(path) {
            path.to_owned()
        } else if path.starts_with('/') {
            format!("{}{path}", self.image_base_url)
        } else {
            format!("{}/uploads/{path}", self.image_base_url)
        }
    }
}

fn resolve_url<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default.to_owned());
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(default.to_owned());
    }
    if !is_http_url(value) {
        return Err(ConfigError::InvalidUrl { var, value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn runtime_var(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn compiled_var(var: &str) -> Option<String> {
    let value = match var {
        API_URL_VAR => option_env!("RENTIT_API_URL"),
        IMAGE_BASE_URL_VAR => option_env!("RENTIT_IMAGE_BASE_URL"),
        _ => None,
    };
    value.map(str::to_owned)
}
