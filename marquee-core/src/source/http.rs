//! HTTP existence probe for production use.

use async_trait::async_trait;
use url::Url;

use super::{SourceError, SourceProbe};
use crate::config::NetworkConfig;

/// Existence probe issuing header-only HTTP requests.
///
/// Sends a HEAD request per candidate against the static asset server so a
/// hit is confirmed without transferring the file body. Relative locators
/// are joined onto the configured origin.
#[derive(Debug)]
pub struct HttpSourceProbe {
    client: reqwest::Client,
    origin: String,
    user_agent: &'static str,
    timeout: Option<std::time::Duration>,
}

impl HttpSourceProbe {
    /// Create new HTTP probe from network configuration.
    pub fn new(network: &NetworkConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: network.origin.clone(),
            user_agent: network.user_agent,
            timeout: network.probe_timeout,
        }
    }

    /// Create HTTP probe against a specific origin, with default request settings.
    pub fn with_origin(origin: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin,
            user_agent: NetworkConfig::default().user_agent,
            timeout: None,
        }
    }

    /// Builds the absolute request URL for a locator.
    fn request_url(&self, locator: &str) -> Result<Url, SourceError> {
        let absolute = if locator.starts_with("http://") || locator.starts_with("https://") {
            locator.to_string()
        } else {
            format!("{}{}", self.origin.trim_end_matches('/'), locator)
        };

        Url::parse(&absolute).map_err(|_| SourceError::InvalidProbeTarget { url: absolute })
    }
}

#[async_trait]
impl SourceProbe for HttpSourceProbe {
    async fn exists(&self, locator: &str) -> Result<bool, SourceError> {
        let url = self.request_url(locator)?;

        let mut request = self
            .client
            .head(url.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| SourceError::ProbeFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_joins_relative_locator() {
        let probe = HttpSourceProbe::with_origin("http://localhost:8080/".to_string());

        let url = probe.request_url("/videos/42.mp4").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/videos/42.mp4");
    }

    #[test]
    fn test_request_url_passes_absolute_locator_through() {
        let probe = HttpSourceProbe::with_origin("http://localhost:8080".to_string());

        let url = probe.request_url("http://media.local/videos/7.mkv").unwrap();
        assert_eq!(url.as_str(), "http://media.local/videos/7.mkv");
    }

    #[test]
    fn test_request_url_rejects_malformed_locator() {
        let probe = HttpSourceProbe::with_origin(String::new());

        let result = probe.request_url("/videos/42.mp4");
        assert!(matches!(
            result,
            Err(SourceError::InvalidProbeTarget { .. })
        ));
    }
}
