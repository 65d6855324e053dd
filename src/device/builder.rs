// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elgato client builder.

use std::time::Duration;

use crate::device::Elgato;
use crate::error::Result;
use crate::protocol::HttpConfig;

/// Builder for creating an [`Elgato`] client.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use elgato_lib::Elgato;
///
/// # async fn example() -> elgato_lib::Result<()> {
/// // Defaults: port 9123, 8 second timeout, own connection pool
/// let light = Elgato::builder("elgato-key-light.local").build()?;
///
/// // Shared pool and custom timeout
/// let pool = reqwest::Client::new();
/// let light = Elgato::builder("192.168.1.42")
///     .with_client(pool.clone())
///     .with_timeout(Duration::from_secs(2))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ElgatoBuilder {
    config: HttpConfig,
}

impl ElgatoBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets the port the light listens on.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Uses a connection pool owned by the caller.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.config = self.config.with_client(client);
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the client. No request is made.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if host and port do not form a URL.
    pub fn build(self) -> Result<Elgato> {
        Ok(Elgato::from_http(self.config.into_client()?))
    }

    /// Builds the client and fetches the accessory info to check that the
    /// light answers.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the info request fails.
    pub async fn connect(self) -> Result<(Elgato, crate::response::Info)> {
        let light = self.build()?;
        let info = light.get_info().await?;
        tracing::debug!(
            product = %info.product_name(),
            serial = %info.serial_number(),
            "Connected to Elgato light"
        );
        Ok((light, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = ElgatoBuilder::new(HttpConfig::new("example.com"));
        assert_eq!(builder.config().port(), HttpConfig::DEFAULT_PORT);
        assert_eq!(builder.config().timeout(), HttpConfig::DEFAULT_TIMEOUT);
    }

    #[test]
    fn builder_with_all_options() {
        let builder = ElgatoBuilder::new(HttpConfig::new("example.com"))
            .with_port(3333)
            .with_timeout(Duration::from_secs(1))
            .with_client(reqwest::Client::new());

        assert_eq!(builder.config().port(), 3333);
        assert_eq!(builder.config().timeout(), Duration::from_secs(1));
        assert!(builder.config().has_shared_client());
    }

    #[test]
    fn builder_build() {
        let light = ElgatoBuilder::new(HttpConfig::new("example.com"))
            .with_port(3333)
            .build()
            .unwrap();
        assert_eq!(light.base_url(), "http://example.com:3333/");
    }

    #[test]
    fn builder_build_invalid_host() {
        let result = ElgatoBuilder::new(HttpConfig::new("bad host")).build();
        assert!(result.is_err());
    }
}
