//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::NewLink;

/// Request to shorten a single URL.
///
/// Unknown fields are ignored. `url` is optional here so that a missing field
/// and an empty string are rejected the same way by the registry.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,

    /// Validity in minutes; omitted or zero means the configured default.
    pub validity: Option<i64>,

    /// Requested short code; omitted or empty means generate one.
    pub shortcode: Option<String>,
}

impl From<ShortenRequest> for NewLink {
    fn from(request: ShortenRequest) -> Self {
        Self {
            long_url: request.url.unwrap_or_default(),
            custom_code: request.shortcode,
            validity_minutes: request.validity,
        }
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    /// RFC 3339 expiry timestamp.
    pub expiry: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_all_fields() {
        let request: ShortenRequest = serde_json::from_value(json!({
            "url": "https://example.com",
            "validity": 1,
            "shortcode": "abc123"
        }))
        .unwrap();

        let new_link = NewLink::from(request);
        assert_eq!(new_link.long_url, "https://example.com");
        assert_eq!(new_link.validity_minutes, Some(1));
        assert_eq!(new_link.custom_code.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_request_missing_url() {
        let request: ShortenRequest = serde_json::from_value(json!({ "validity": 5 })).unwrap();
        assert!(NewLink::from(request).long_url.is_empty());
    }

    #[test]
    fn test_request_rejects_fractional_validity() {
        let result = serde_json::from_value::<ShortenRequest>(json!({
            "url": "https://example.com",
            "validity": 1.5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_field_names() {
        let response = ShortenResponse {
            short_link: "http://localhost:8080/abc123".to_string(),
            expiry: "2024-01-01T00:30:00Z".to_string(),
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "shortLink": "http://localhost:8080/abc123",
                "expiry": "2024-01-01T00:30:00Z"
            })
        );
    }
}
