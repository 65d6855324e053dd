// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Partial state updates.
//!
//! A [`StateChange`] carries only the fields the caller wants to change.
//! Values are kept as given and checked by [`StateChange::validate`], which
//! the client runs before anything is sent to the device.
//!
//! # Examples
//!
//! ```
//! use elgato_lib::state::StateChange;
//! use elgato_lib::types::PowerState;
//!
//! let change = StateChange::new()
//!     .with_power(PowerState::On)
//!     .with_brightness(100)
//!     .with_temperature(275);
//! assert!(change.validate().is_ok());
//!
//! let too_dark = StateChange::new().with_brightness(1);
//! assert!(too_dark.validate().is_err());
//! ```

use serde::Serialize;

use crate::error::ValueError;
use crate::types::{Brightness, ColorTemperature, Hue, PowerState, Saturation};

use super::State;

/// A partial update of a light's state.
///
/// Every field appears at most once; unset fields are omitted from the
/// request body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateChange {
    #[serde(rename = "on", skip_serializing_if = "Option::is_none")]
    power: Option<PowerState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brightness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saturation: Option<f64>,
}

impl StateChange {
    /// Creates an empty change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change that turns the light on.
    #[must_use]
    pub fn turn_on() -> Self {
        Self::new().with_power(PowerState::On)
    }

    /// Change that turns the light off.
    #[must_use]
    pub fn turn_off() -> Self {
        Self::new().with_power(PowerState::Off)
    }

    /// Sets the power state.
    #[must_use]
    pub fn with_power(mut self, power: PowerState) -> Self {
        self.power = Some(power);
        self
    }

    /// Sets the brightness percentage (valid range 3-100).
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the color temperature in mireds (valid range 143-344).
    #[must_use]
    pub fn with_temperature(mut self, temperature: u16) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the hue in degrees (valid range 0-360).
    #[must_use]
    pub fn with_hue(mut self, hue: f64) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets the saturation percentage (valid range 0-100).
    #[must_use]
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Returns the requested power state.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Returns the requested brightness.
    #[must_use]
    pub fn brightness(&self) -> Option<u8> {
        self.brightness
    }

    /// Returns the requested color temperature.
    #[must_use]
    pub fn temperature(&self) -> Option<u16> {
        self.temperature
    }

    /// Returns the requested hue.
    #[must_use]
    pub fn hue(&self) -> Option<f64> {
        self.hue
    }

    /// Returns the requested saturation.
    #[must_use]
    pub fn saturation(&self) -> Option<f64> {
        self.saturation
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.power.is_none()
            && self.brightness.is_none()
            && self.temperature.is_none()
            && self.hue.is_none()
            && self.saturation.is_none()
    }

    /// Checks every present field against its documented range.
    ///
    /// # Errors
    ///
    /// - `ValueError::EmptyChange` if no field is set
    /// - `ValueError::ConflictingColorModes` if temperature is combined with
    ///   hue or saturation
    /// - `ValueError::OutOfRange` / `ValueError::OutOfRangeFloat` for the
    ///   first field outside its range
    pub fn validate(&self) -> Result<(), ValueError> {
        if self.is_empty() {
            return Err(ValueError::EmptyChange);
        }
        if self.temperature.is_some() && (self.hue.is_some() || self.saturation.is_some()) {
            return Err(ValueError::ConflictingColorModes);
        }
        if let Some(brightness) = self.brightness {
            Brightness::new(brightness)?;
        }
        if let Some(temperature) = self.temperature {
            ColorTemperature::new(temperature)?;
        }
        if let Some(hue) = self.hue {
            Hue::new(hue)?;
        }
        if let Some(saturation) = self.saturation {
            Saturation::new(saturation)?;
        }
        Ok(())
    }
}

impl From<Brightness> for StateChange {
    fn from(value: Brightness) -> Self {
        Self::new().with_brightness(value.value())
    }
}

impl From<ColorTemperature> for StateChange {
    fn from(value: ColorTemperature) -> Self {
        Self::new().with_temperature(value.value())
    }
}

impl From<PowerState> for StateChange {
    fn from(value: PowerState) -> Self {
        Self::new().with_power(value)
    }
}

/// Outcome of a state change.
///
/// Devices answer a state update either by echoing the full state or with
/// an empty acknowledgement. Both shapes are kept distinct so the caller
/// knows whether the state came from the device.
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    /// The device echoed its state after applying the change.
    Reported(State),
    /// The device accepted the change without echoing a state.
    Acknowledged(StateChange),
}

impl StateUpdate {
    /// Returns the state echoed by the device, if any.
    #[must_use]
    pub fn reported(&self) -> Option<&State> {
        match self {
            Self::Reported(state) => Some(state),
            Self::Acknowledged(_) => None,
        }
    }

    /// Resolves the new state given the state known before the change.
    ///
    /// An echoed state is returned as is. An acknowledgement is synthesized
    /// by applying the sent change on top of `previous`.
    ///
    /// ```
    /// use elgato_lib::state::{State, StateChange, StateUpdate};
    /// use elgato_lib::types::PowerState;
    ///
    /// let previous = State::new(PowerState::Off, 20).with_temperature(200);
    /// let update = StateUpdate::Acknowledged(StateChange::turn_on());
    ///
    /// let state = update.apply_to(&previous);
    /// assert!(state.is_on());
    /// assert_eq!(state.brightness(), 20);
    /// ```
    #[must_use]
    pub fn apply_to(&self, previous: &State) -> State {
        match self {
            Self::Reported(state) => state.clone(),
            Self::Acknowledged(change) => {
                let mut state = previous.clone();
                state.apply(change);
                state
            }
        }
    }
}
