//! HTTP transport shared by all vendor clients.
//!
//! Responsibilities:
//! - Hold the per-server `reqwest::Client`, base URL, and basic-auth
//!   credentials.
//! - Execute GET/POST with the configured timeout and TLS policy.
//! - Classify non-success responses into [`ClientError`] variants and decode
//!   JSON bodies.
//!
//! Does NOT handle:
//! - Vendor-specific URL shapes (see `vendors`).
//! - Retries or caching (out of scope for this tool).

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Connection parameters and HTTP plumbing for one BMC.
///
/// Created fresh per invocation per server and discarded when the worker
/// finishes; nothing is pooled across invocations.
#[derive(Debug)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: SecretString,
}

impl Transport {
    /// Build a transport for `hostname`.
    ///
    /// BMCs almost universally present self-signed certificates, so
    /// certificate verification is opt-in via `verify_tls`.
    pub fn new(
        hostname: &str,
        username: String,
        password: SecretString,
        timeout: Duration,
        verify_tls: bool,
    ) -> Result<Self> {
        if hostname.is_empty() {
            return Err(ClientError::InvalidUrl("hostname is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_tls)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("https://{}", hostname.trim_end_matches('/')),
            username,
            password,
        })
    }

    /// Build a transport against an explicit base URL. Test servers speak
    /// plain HTTP on ephemeral ports, which hostname-based construction
    /// cannot express.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_base_url(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }

    /// Absolute URL for a Redfish odata path such as
    /// `/redfish/v1/Systems/System.Embedded.1`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::classify_status(status, url, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            url,
            message: e.to_string(),
        })
    }

    /// POST a JSON payload to `path`. Redfish actions return 200/202/204
    /// with bodies we do not need.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        debug!(url = %url, "POST");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::classify_status(status, url, body));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_https_base_url() {
        let t = Transport::new(
            "192.168.1.100",
            "root".into(),
            SecretString::new("calvin".to_string().into()),
            Duration::from_secs(30),
            false,
        )
        .unwrap();
        assert_eq!(
            t.url("/redfish/v1/Systems"),
            "https://192.168.1.100/redfish/v1/Systems"
        );
    }

    #[test]
    fn empty_hostname_is_rejected() {
        let result = Transport::new(
            "",
            "root".into(),
            SecretString::new("calvin".to_string().into()),
            Duration::from_secs(30),
            false,
        );
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn debug_output_does_not_expose_password() {
        let t = Transport::new(
            "h1",
            "root".into(),
            SecretString::new("hunter2".to_string().into()),
            Duration::from_secs(5),
            false,
        )
        .unwrap();
        assert!(!format!("{:?}", t).contains("hunter2"));
    }
}
