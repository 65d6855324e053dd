// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Elgato lights.

use std::time::Duration;

use parking_lot::Mutex;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

const USER_AGENT_VALUE: &str = concat!("elgato_lib/", env!("CARGO_PKG_VERSION"));
const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

// ============================================================================
// HttpConfig - Connection parameters for one device
// ============================================================================

/// Configuration for an HTTP connection to an Elgato light.
///
/// # Examples
///
/// ```
/// use elgato_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.100")
///     .with_port(9123)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.100:9123");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
    client: Option<Client>,
}

impl HttpConfig {
    /// Port the Elgato API listens on.
    pub const DEFAULT_PORT: u16 = 9123;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the light
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a shared connection pool owned by the caller.
    ///
    /// The client never releases a shared pool; closing the client leaves it
    /// usable by the caller.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `true` if a shared pool was supplied.
    #[must_use]
    pub fn has_shared_client(&self) -> bool {
        self.client.is_some()
    }

    /// Builds the base URL from this configuration.
    ///
    /// IPv6 literals are wrapped in brackets.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if host and port do not form a URL.
    pub fn into_client(self) -> Result<HttpClient> {
        let base_url = self.base_url();
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| url.host().is_some())
            .ok_or_else(|| Error::InvalidAddress(base_url))?;

        let pool = match self.client {
            Some(client) => Pool::Shared(client),
            None => Pool::Owned(Mutex::new(None)),
        };

        Ok(HttpClient {
            base_url,
            timeout: self.timeout,
            pool,
        })
    }
}

// ============================================================================
// HttpClient - Request execution
// ============================================================================

/// Connection pool backing an [`HttpClient`].
#[derive(Debug)]
enum Pool {
    /// Supplied by the caller; never released here.
    Shared(Client),
    /// Created lazily on first use, released by [`HttpClient::close`].
    Owned(Mutex<Option<Client>>),
}

/// HTTP client for one Elgato light.
///
/// Each request is independent. The whole exchange (sending and reading the
/// body) is bounded by the configured timeout.
///
/// # Examples
///
/// ```no_run
/// use elgato_lib::protocol::HttpConfig;
/// use reqwest::Method;
///
/// # async fn example() -> elgato_lib::Result<()> {
/// let client = HttpConfig::new("192.168.1.100").into_client()?;
/// let response = client.send(Method::GET, "/elgato/lights", None::<&()>).await?;
/// println!("{}", response.body());
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    base_url: Url,
    timeout: Duration,
    pool: Pool,
}

impl HttpClient {
    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `true` if this client created its own connection pool.
    #[must_use]
    pub fn owns_pool(&self) -> bool {
        matches!(self.pool, Pool::Owned(_))
    }

    /// Releases the connection pool this client created.
    ///
    /// Idempotent. A shared pool is left untouched. A request issued after
    /// closing creates a fresh pool.
    pub fn close(&self) {
        match &self.pool {
            Pool::Owned(slot) => {
                if slot.lock().take().is_some() {
                    tracing::debug!(base_url = %self.base_url, "Released connection pool");
                }
            }
            Pool::Shared(_) => {
                tracing::debug!(base_url = %self.base_url, "Leaving shared connection pool open");
            }
        }
    }

    fn pool(&self) -> Result<Client> {
        match &self.pool {
            Pool::Shared(client) => Ok(client.clone()),
            Pool::Owned(slot) => {
                let mut slot = slot.lock();
                if let Some(client) = slot.as_ref() {
                    return Ok(client.clone());
                }
                let client = Client::builder()
                    .build()
                    .map_err(|e| Error::Connection(e.to_string()))?;
                tracing::debug!(base_url = %self.base_url, "Created connection pool");
                *slot = Some(client.clone());
                Ok(client)
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Sends a request to the device.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Absolute resource path, e.g. `/elgato/lights`
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// - `Error::Connection` if the device cannot be reached
    /// - `Error::Timeout` if the exchange exceeds the timeout
    /// - `Error::Response` if the device returns a non-2xx status
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::InvalidAddress(format!("{path}: {e}")))?;

        let mut request = self
            .pool()?
            .request(method.clone(), url.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, ACCEPT_VALUE);
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, url = %url, "Sending HTTP request");

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, content_type, body))
        };

        let (status, content_type, body) = match tokio::time::timeout(self.timeout, exchange).await
        {
            Err(_) => {
                tracing::debug!(url = %url, timeout_ms = self.timeout_ms(), "HTTP request timed out");
                return Err(Error::Timeout(self.timeout_ms()));
            }
            Ok(Err(e)) => return Err(self.classify(&e)),
            Ok(Ok(parts)) => parts,
        };

        tracing::debug!(status = status.as_u16(), body = %body, "Received HTTP response");

        if !status.is_success() {
            return Err(Error::response(
                status.as_u16(),
                format!(
                    "HTTP {} - {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
                body,
            ));
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    fn classify(&self, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout_ms())
        } else {
            tracing::debug!(error = %err, "HTTP request failed");
            Error::Connection(err.to_string())
        }
    }
}

// ============================================================================
// HttpResponse - Successful response
// ============================================================================

/// A 2xx response from the device.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u16,
    content_type: String,
    body: String,
}

impl HttpResponse {
    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body is empty or whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Parses the body as JSON into the target type.
    ///
    /// # Errors
    ///
    /// Returns `Error::Response` if the content type is not JSON or the body
    /// does not match the target type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.content_type.contains("application/json") {
            return Err(Error::response(
                self.status,
                format!("unexpected content type '{}'", self.content_type),
                self.body.clone(),
            ));
        }
        serde_json::from_str(&self.body).map_err(|e| {
            Error::response(self.status, format!("invalid JSON: {e}"), self.body.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            content_type: content_type.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.100");
        assert_eq!(config.host(), "192.168.1.100");
        assert_eq!(config.port(), 9123);
        assert_eq!(config.timeout(), Duration::from_secs(8));
        assert!(!config.has_shared_client());
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new("example.com")
            .with_port(3333)
            .with_timeout(Duration::from_secs(1))
            .with_client(Client::new());

        assert_eq!(config.port(), 3333);
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert!(config.has_shared_client());
        assert_eq!(config.base_url(), "http://example.com:3333");
    }

    #[test]
    fn http_config_base_url_ipv6() {
        let config = HttpConfig::new("fe80::1");
        assert_eq!(config.base_url(), "http://[fe80::1]:9123");
    }

    #[test]
    fn http_config_into_client() {
        let client = HttpConfig::new("192.168.1.100").into_client().unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.100:9123/");
        assert!(client.owns_pool());
    }

    #[test]
    fn http_config_shared_pool_not_owned() {
        let client = HttpConfig::new("192.168.1.100")
            .with_client(Client::new())
            .into_client()
            .unwrap();
        assert!(!client.owns_pool());
    }

    #[test]
    fn http_config_invalid_host() {
        let result = HttpConfig::new("not a host").into_client();
        assert!(matches!(result, Err(Error::InvalidAddress(_))));

        let result = HttpConfig::new("").into_client();
        assert!(matches!(result, Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn close_is_idempotent() {
        let client = HttpConfig::new("192.168.1.100").into_client().unwrap();
        client.pool().unwrap();
        client.close();
        client.close();
        assert!(matches!(&client.pool, Pool::Owned(slot) if slot.lock().is_none()));
    }

    #[test]
    fn pool_is_recreated_after_close() {
        let client = HttpConfig::new("192.168.1.100").into_client().unwrap();
        client.close();
        assert!(client.pool().is_ok());
        assert!(matches!(&client.pool, Pool::Owned(slot) if slot.lock().is_some()));
    }

    #[test]
    fn parse_json_body() {
        let value: serde_json::Value = response("application/json", r#"{"status": "ok"}"#)
            .parse()
            .unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[test]
    fn parse_rejects_non_json_content_type() {
        let err = response("text/plain", "OMG PUPPIES!")
            .parse::<serde_json::Value>()
            .unwrap_err();
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.body(), Some("OMG PUPPIES!"));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = response("application/json; charset=utf-8", "{not json")
            .parse::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, Error::Response { status: 200, .. }));
    }

    #[test]
    fn empty_body_detection() {
        assert!(response("", "").is_empty());
        assert!(response("application/json", "  \n").is_empty());
        assert!(!response("application/json", "{}").is_empty());
    }
}
