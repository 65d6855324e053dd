// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reported light state.

use serde::{Deserialize, Serialize};

use crate::types::PowerState;

use super::StateChange;

/// Current state of an Elgato light, as reported by the device.
///
/// Values are stored exactly as the device sent them. Decoding checks the
/// shape of the payload (`on` and `brightness` are required, numbers must
/// have the right type) but never clamps or rejects a reading that falls
/// outside the documented ranges.
///
/// White-light devices report `temperature`; color devices report `hue` and
/// `saturation`.
///
/// # Examples
///
/// ```
/// use elgato_lib::state::State;
///
/// let json = r#"{"on": 1, "brightness": 21, "temperature": 297}"#;
/// let state: State = serde_json::from_str(json).unwrap();
/// assert!(state.is_on());
/// assert_eq!(state.brightness(), 21);
/// assert_eq!(state.temperature(), Some(297));
/// assert_eq!(state.hue(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    on: PowerState,
    brightness: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saturation: Option<f64>,
}

impl State {
    /// Creates a state with the given power and brightness and no color.
    #[must_use]
    pub fn new(power: PowerState, brightness: u8) -> Self {
        Self {
            on: power,
            brightness,
            temperature: None,
            hue: None,
            saturation: None,
        }
    }

    /// Sets the color temperature in mireds.
    #[must_use]
    pub fn with_temperature(mut self, temperature: u16) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets hue and saturation.
    #[must_use]
    pub fn with_hue_saturation(mut self, hue: f64, saturation: f64) -> Self {
        self.hue = Some(hue);
        self.saturation = Some(saturation);
        self
    }

    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.on
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on.is_on()
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the color temperature in mireds, if reported.
    #[must_use]
    pub fn temperature(&self) -> Option<u16> {
        self.temperature
    }

    /// Returns the hue in degrees, if reported.
    #[must_use]
    pub fn hue(&self) -> Option<f64> {
        self.hue
    }

    /// Returns the saturation percentage, if reported.
    #[must_use]
    pub fn saturation(&self) -> Option<f64> {
        self.saturation
    }

    /// Applies a change to this state.
    ///
    /// Only the fields present in the change are overwritten.
    ///
    /// # Returns
    ///
    /// `true` if any field actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        let before = self.clone();

        if let Some(power) = change.power() {
            self.on = power;
        }
        if let Some(brightness) = change.brightness() {
            self.brightness = brightness;
        }
        if let Some(temperature) = change.temperature() {
            self.temperature = Some(temperature);
        }
        if let Some(hue) = change.hue() {
            self.hue = Some(hue);
        }
        if let Some(saturation) = change.saturation() {
            self.saturation = Some(saturation);
        }

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_light_state() {
        let json = r#"{"on": 1, "brightness": 21, "temperature": 297}"#;
        let state: State = serde_json::from_str(json).unwrap();

        assert_eq!(state, State::new(PowerState::On, 21).with_temperature(297));
    }

    #[test]
    fn parse_light_strip_state() {
        let json = r#"{"on": 0, "brightness": 50, "hue": 40.0, "saturation": 15.5}"#;
        let state: State = serde_json::from_str(json).unwrap();

        assert!(!state.is_on());
        assert_eq!(state.temperature(), None);
        assert_eq!(state.hue(), Some(40.0));
        assert_eq!(state.saturation(), Some(15.5));
    }

    #[test]
    fn parse_does_not_clamp() {
        let json = r#"{"on": 1, "brightness": 0, "temperature": 500}"#;
        let state: State = serde_json::from_str(json).unwrap();

        assert_eq!(state.brightness(), 0);
        assert_eq!(state.temperature(), Some(500));
    }

    #[test]
    fn parse_rejects_missing_brightness() {
        let json = r#"{"on": 1, "temperature": 297}"#;
        assert!(serde_json::from_str::<State>(json).is_err());
    }

    #[test]
    fn parse_rejects_wrong_type() {
        let json = r#"{"on": 1, "brightness": "bright"}"#;
        assert!(serde_json::from_str::<State>(json).is_err());
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let json = r#"{"on": 1, "brightness": 10, "temperature": 200, "mode": "x"}"#;
        assert!(serde_json::from_str::<State>(json).is_ok());
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = State::new(PowerState::Off, 20).with_temperature(200);

        let change = StateChange::new().with_power(PowerState::On).with_brightness(80);
        assert!(state.apply(&change));
        assert!(state.is_on());
        assert_eq!(state.brightness(), 80);
        assert_eq!(state.temperature(), Some(200));

        // Applying the same change again is a no-op
        assert!(!state.apply(&change));
    }
}
