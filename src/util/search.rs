//! Search filters and their URL query-string form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search page keeps its filters in the URL so results are linkable and
//! survive reloads. This module is the one place that maps between the query
//! string, the form state, and the backend `/search` parameters.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{PropertyType, SearchParams};

/// Results per search page.
pub const SEARCH_PAGE_SIZE: u32 = 12;

const KEY_LOCATION: &str = "location";
const KEY_MIN_PRICE: &str = "minPrice";
const KEY_MAX_PRICE: &str = "maxPrice";
const KEY_PROPERTY_TYPE: &str = "propertyType";
const KEY_BEDROOMS: &str = "bedrooms";
const KEY_PAGE: &str = "page";

/// Search form state. `None` means "no filter".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilters {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u32>,
    /// Zero-based.
    pub page: u32,
}

impl SearchFilters {
    /// Build from any key lookup (router query map, parsed pairs).
    /// Blank and unparseable values read as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            location: lookup(KEY_LOCATION).and_then(non_blank),
            min_price: lookup(KEY_MIN_PRICE).and_then(|v| parse_price(&v)),
            max_price: lookup(KEY_MAX_PRICE).and_then(|v| parse_price(&v)),
            property_type: lookup(KEY_PROPERTY_TYPE).and_then(|v| v.parse().ok()),
            bedrooms: lookup(KEY_BEDROOMS).and_then(|v| v.trim().parse().ok()),
            page: lookup(KEY_PAGE).and_then(|v| v.trim().parse().ok()).unwrap_or(0),
        }
    }

    /// Parse a raw query string. A leading `?` is optional; the first
    /// occurrence of a key wins.
    pub fn from_query(query: &str) -> Self {
        let pairs = parse_pairs(query);
        Self::from_lookup(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
    }

    /// Encode set filters (and `page` when non-zero) without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut out = String::new();
        let mut push = |key: &str, value: &str| {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        };

        if let Some(location) = &self.location {
            push(KEY_LOCATION, location);
        }
        if let Some(min) = self.min_price {
            push(KEY_MIN_PRICE, &min.to_string());
        }
        if let Some(max) = self.max_price {
            push(KEY_MAX_PRICE, &max.to_string());
        }
        if let Some(kind) = self.property_type {
            push(KEY_PROPERTY_TYPE, kind.as_str());
        }
        if let Some(bedrooms) = self.bedrooms {
            push(KEY_BEDROOMS, &bedrooms.to_string());
        }
        if self.page > 0 {
            push(KEY_PAGE, &self.page.to_string());
        }
        out
    }

    /// Router path for these filters.
    pub fn to_path(&self) -> String {
        let query = self.to_query();
        let mut path = String::from("/search");
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
        path
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self { page, ..self.clone() }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.property_type.is_none()
            && self.bedrooms.is_none()
    }

    /// Backend parameters for `GET /search`.
    pub fn to_api_params(&self, limit: u32) -> SearchParams {
        SearchParams {
            location: self.location.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: None,
            page: self.page,
            limit,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
