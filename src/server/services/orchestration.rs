use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::info;

use crate::configuration::OrchestrationSettings;

/// Sub-resource name for orchestration state under a capability scope.
pub const ORCHESTRATION_RESOURCE: &str = "orchestration";

/// Builds the backend-relative path for a capability-scoped sub-resource.
///
/// The key is percent-encoded, so reserved characters (`/`, `?`, `#`, ...)
/// cannot introduce extra path segments or alter the target resource. Callers
/// must reject empty keys before building a path.
pub fn capability_path(key: &str, resource: &str) -> String {
    format!("/r/{}/{}", urlencoding::encode(key), resource)
}

#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error("Failed to reach orchestration backend: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for OrchestrationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Backend response, relayed to the caller without interpretation. The body
/// stays an opaque byte sequence; any JSON inside is backend-defined.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct OrchestrationService {
    client: Client,
    base_url: String,
}

impl OrchestrationService {
    pub fn new(settings: &OrchestrationSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issues a single GET against the capability's orchestration resource.
    ///
    /// The raw query string is appended byte-for-byte: duplicate keys, empty
    /// values, and parameter order all reach the backend exactly as they
    /// arrived. No inbound headers are forwarded; the only header sent is
    /// `accept: application/json`. The response body is buffered in full.
    pub async fn fetch_orchestration(
        &self,
        key: &str,
        raw_query: Option<&str>,
    ) -> Result<UpstreamResponse, OrchestrationError> {
        let mut url = format!(
            "{}{}",
            self.base_url,
            capability_path(key, ORCHESTRATION_RESOURCE)
        );
        if let Some(query) = raw_query {
            url.push('?');
            url.push_str(query);
        }

        info!("Forwarding orchestration request to {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_path_has_fixed_structure() {
        assert_eq!(
            capability_path("abc", ORCHESTRATION_RESOURCE),
            "/r/abc/orchestration"
        );
    }

    #[test]
    fn capability_path_keeps_reserved_characters_in_one_segment() {
        let path = capability_path("a/b", ORCHESTRATION_RESOURCE);
        assert_eq!(path, "/r/a%2Fb/orchestration");

        let path = capability_path("a?b#c", ORCHESTRATION_RESOURCE);
        // Everything between "/r/" and the resource is a single segment.
        assert_eq!(path.matches('/').count(), 3);
        assert!(!path.contains('?'));
        assert!(!path.contains('#'));
    }

    #[test]
    fn encoded_key_round_trips() {
        for key in ["abc", "a/b", "a b", "a?b=c&d", "höhle", "100%"] {
            let path = capability_path(key, ORCHESTRATION_RESOURCE);
            let encoded = path
                .strip_prefix("/r/")
                .and_then(|rest| rest.strip_suffix("/orchestration"))
                .unwrap();
            assert_eq!(urlencoding::decode(encoded).unwrap(), key);
        }
    }
}
