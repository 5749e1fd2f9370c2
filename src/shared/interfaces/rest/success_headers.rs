//! `Location` header for responses that report a newly created resource.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, HeaderName, HeaderValue, header::LOCATION};
use serde_json::Value;

pub const LOCATION_HEADER: &str = "Location";
pub const DEFAULT_URL_FIELD_NAME: &str = "url";

/// Reads the created resource's URL out of a response payload.
///
/// Every failure path (payload is not an object, key missing) yields no
/// headers rather than an error.
#[derive(Clone, Debug)]
pub struct SuccessHeadersBuilder {
    url_field_name: String,
}

impl SuccessHeadersBuilder {
    pub fn new(url_field_name: impl Into<String>) -> Self {
        Self {
            url_field_name: url_field_name.into(),
        }
    }

    pub fn url_field_name(&self) -> &str {
        &self.url_field_name
    }

    pub fn build_headers(&self, payload: &Value) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();

        if let Some(location) = payload
            .as_object()
            .and_then(|fields| fields.get(&self.url_field_name))
        {
            let location = match location {
                Value::String(url) => url.clone(),
                other => other.to_string(),
            };
            headers.insert(LOCATION_HEADER.to_string(), location);
        }

        headers
    }

    /// Same as [`Self::build_headers`], dropping values that cannot travel in
    /// an HTTP header.
    pub fn to_header_map(&self, payload: &Value) -> HeaderMap {
        let mut header_map = HeaderMap::new();
        for (name, value) in self.build_headers(payload) {
            let name = if name == LOCATION_HEADER {
                LOCATION
            } else {
                match HeaderName::try_from(name.as_str()) {
                    Ok(name) => name,
                    Err(_) => continue,
                }
            };
            if let Ok(value) = HeaderValue::from_str(&value) {
                header_map.insert(name, value);
            }
        }
        header_map
    }
}

impl Default for SuccessHeadersBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_URL_FIELD_NAME)
    }
}
