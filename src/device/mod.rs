// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for one Elgato light.
//!
//! Every method is a single stateless request against one of the device's
//! fixed resource paths. There is no retry and no internal locking around
//! requests: concurrent calls on the same client run independently and
//! concurrent state changes reach the device in no particular order.
//!
//! ```no_run
//! use elgato_lib::Elgato;
//! use elgato_lib::state::StateChange;
//!
//! # async fn example() -> elgato_lib::Result<()> {
//! let light = Elgato::new("elgato-key-light.local")?;
//!
//! let state = light.get_state().await?;
//! light
//!     .set_state(&StateChange::new().with_power((!state.is_on()).into()))
//!     .await?;
//!
//! light.close();
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::ElgatoBuilder;

use reqwest::Method;
use serde::Serialize;

use crate::error::{Error, Result, ValueError};
use crate::protocol::{HttpClient, HttpConfig, HttpResponse};
use crate::response::{
    BatteryInfo, BatteryUpdate, BatteryUpdateBody, DisplayNameUpdate, EnergySavingSettings, Info,
    LightsEnvelope, Settings,
};
use crate::state::{State, StateChange, StateUpdate};

/// Resource paths exposed by the device.
pub mod paths {
    /// Light state.
    pub const LIGHTS: &str = "/elgato/lights";
    /// Accessory identity and display name.
    pub const ACCESSORY_INFO: &str = "/elgato/accessory-info";
    /// Power-on defaults, transitions and battery settings.
    pub const SETTINGS: &str = "/elgato/lights/settings";
    /// Battery readings.
    pub const BATTERY_INFO: &str = "/elgato/battery-info";
    /// Blink the light.
    pub const IDENTIFY: &str = "/elgato/identify";
    /// Reboot the light.
    pub const RESTART: &str = "/elgato/restart";
}

/// Client for an Elgato light.
///
/// Create one per device and reuse it across calls. Use
/// [`Elgato::builder`] to change the port or timeout, or to share a
/// connection pool.
#[derive(Debug)]
pub struct Elgato {
    http: HttpClient,
}

impl Elgato {
    pub(crate) fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Creates a client with the default port and timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if the host is not a valid hostname
    /// or IP address.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::builder(host).build()
    }

    /// Creates a builder for the given host.
    #[must_use]
    pub fn builder(host: impl Into<String>) -> ElgatoBuilder {
        ElgatoBuilder::new(HttpConfig::new(host))
    }

    /// Creates a builder from a full configuration.
    #[must_use]
    pub fn from_config(config: HttpConfig) -> ElgatoBuilder {
        ElgatoBuilder::new(config)
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Releases the connection pool this client created.
    ///
    /// Idempotent; never touches a pool supplied by the caller.
    pub fn close(&self) {
        self.http.close();
    }

    async fn get(&self, path: &str) -> Result<HttpResponse> {
        self.http.send(Method::GET, path, None::<&()>).await
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse> {
        self.http.send(Method::PUT, path, Some(body)).await
    }

    async fn post(&self, path: &str) -> Result<HttpResponse> {
        self.http.send(Method::POST, path, None::<&()>).await
    }

    // ========== Light State ==========

    /// Fetches the current light state.
    ///
    /// # Errors
    ///
    /// - `Error::Connection` if the light cannot be reached
    /// - `Error::Timeout` if it does not answer in time
    /// - `Error::Response` on a non-2xx status, a malformed body, or a body
    ///   without any light
    pub async fn get_state(&self) -> Result<State> {
        let response = self.get(paths::LIGHTS).await?;
        first_light(&response, response.parse()?)
    }

    /// Changes the light state.
    ///
    /// The change is validated first; nothing is sent if any field is out
    /// of range. Only the fields set in the change are sent.
    ///
    /// Returns [`StateUpdate::Reported`] when the device echoes its new
    /// state, or [`StateUpdate::Acknowledged`] carrying the change as sent
    /// when the device answers with an empty body or without a light entry.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if the change is empty or out of range
    /// - `Error::Connection`, `Error::Timeout`, `Error::Response` as for
    ///   [`get_state`](Self::get_state)
    pub async fn set_state(&self, change: &StateChange) -> Result<StateUpdate> {
        if let Err(e) = change.validate() {
            tracing::debug!(?change, error = %e, "Rejected state change");
            return Err(e.into());
        }

        tracing::debug!(?change, "Setting light state");
        let response = self
            .put(paths::LIGHTS, &LightsEnvelope::single(change))
            .await?;

        if response.is_empty() {
            return Ok(StateUpdate::Acknowledged(change.clone()));
        }

        let value: serde_json::Value = response.parse()?;
        let has_lights = value
            .get("lights")
            .and_then(serde_json::Value::as_array)
            .is_some_and(|lights| !lights.is_empty());
        if !has_lights {
            return Ok(StateUpdate::Acknowledged(change.clone()));
        }

        let envelope = serde_json::from_value(value).map_err(|e| {
            Error::response(
                response.status(),
                format!("invalid JSON: {e}"),
                response.body(),
            )
        })?;
        first_light(&response, envelope).map(StateUpdate::Reported)
    }

    /// Turns the light on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn turn_on(&self) -> Result<StateUpdate> {
        self.set_state(&StateChange::turn_on()).await
    }

    /// Turns the light off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn turn_off(&self) -> Result<StateUpdate> {
        self.set_state(&StateChange::turn_off()).await
    }

    /// Reads the power state and flips it.
    ///
    /// Two requests; another caller may change the light in between.
    ///
    /// # Errors
    ///
    /// Returns error if either request fails.
    pub async fn toggle(&self) -> Result<State> {
        let current = self.get_state().await?;
        let change = StateChange::new().with_power(current.power().toggled());
        Ok(self.set_state(&change).await?.apply_to(&current))
    }

    // ========== Accessory Info ==========

    /// Fetches the accessory identity.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is malformed.
    pub async fn get_info(&self) -> Result<Info> {
        self.get(paths::ACCESSORY_INFO).await?.parse()
    }

    /// Changes the display name shown in Control Center.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if the name is empty
    /// - otherwise as for [`get_info`](Self::get_info)
    pub async fn set_display_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValueError::EmptyDisplayName.into());
        }
        self.put(
            paths::ACCESSORY_INFO,
            &DisplayNameUpdate { display_name: name },
        )
        .await?;
        Ok(())
    }

    /// Blinks the light so it can be located.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn identify(&self) -> Result<()> {
        self.post(paths::IDENTIFY).await?;
        Ok(())
    }

    /// Reboots the light.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn restart(&self) -> Result<()> {
        self.post(paths::RESTART).await?;
        Ok(())
    }

    // ========== Settings & Battery ==========

    /// Fetches the device settings.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is malformed.
    pub async fn settings(&self) -> Result<Settings> {
        self.get(paths::SETTINGS).await?.parse()
    }

    /// Returns `true` if the device reports a battery.
    ///
    /// # Errors
    ///
    /// Returns error if the settings request fails.
    pub async fn has_battery(&self) -> Result<bool> {
        Ok(self.settings().await?.battery().is_some())
    }

    async fn require_battery(&self) -> Result<()> {
        if self.has_battery().await? {
            Ok(())
        } else {
            Err(Error::NoBattery)
        }
    }

    /// Fetches the battery readings.
    ///
    /// # Errors
    ///
    /// - `Error::NoBattery` if the device has no battery
    /// - otherwise as for [`settings`](Self::settings)
    pub async fn battery(&self) -> Result<BatteryInfo> {
        self.require_battery().await?;
        self.get(paths::BATTERY_INFO).await?.parse()
    }

    /// Enables or disables battery bypass (studio mode).
    ///
    /// # Errors
    ///
    /// - `Error::NoBattery` if the device has no battery
    /// - otherwise as for [`settings`](Self::settings)
    pub async fn battery_bypass(&self, on: bool) -> Result<()> {
        self.require_battery().await?;
        self.put(
            paths::SETTINGS,
            &BatteryUpdate {
                battery: BatteryUpdateBody::Bypass(on),
            },
        )
        .await?;
        Ok(())
    }

    /// Updates the energy saving configuration.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if a value is out of range (checked first)
    /// - `Error::NoBattery` if the device has no battery
    /// - otherwise as for [`settings`](Self::settings)
    pub async fn energy_saving(&self, config: &EnergySavingSettings) -> Result<()> {
        config.validate()?;
        self.require_battery().await?;
        self.put(
            paths::SETTINGS,
            &BatteryUpdate {
                battery: BatteryUpdateBody::EnergySaving(config),
            },
        )
        .await?;
        Ok(())
    }
}

fn first_light(response: &HttpResponse, envelope: LightsEnvelope<State>) -> Result<State> {
    envelope.into_first().ok_or_else(|| {
        Error::response(
            response.status(),
            "response contains no lights",
            response.body(),
        )
    })
}
