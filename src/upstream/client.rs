//! Outbound HTTP client for the placeholder user API.

use serde_json::Value;

/// Read-only client for the upstream user API.
///
/// Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client rooted at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full upstream user list as opaque JSON.
    pub async fn fetch_users(&self) -> Result<Value, reqwest::Error> {
        let url = format!("{}/users", self.base_url);
        tracing::debug!(url = %url, "Fetching upstream users");

        self.http.get(&url).send().await?.json().await
    }

    /// Fetch a single upstream user record as opaque JSON.
    pub async fn fetch_user(&self, id: u64) -> Result<Value, reqwest::Error> {
        let url = format!("{}/users/{}", self.base_url, id);
        tracing::debug!(url = %url, "Fetching upstream user");

        self.http.get(&url).send().await?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = UpstreamClient::new("http://example.com/");
        assert_eq!(client.base_url, "http://example.com");
    }
}
