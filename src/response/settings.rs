// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light settings parsing, from `/elgato/lights/settings`.
//!
//! Battery-powered devices (Key Light Mini) include a `battery` section;
//! its presence is how the client tells whether a device has a battery.

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::int_bool;

/// Device settings.
///
/// # Examples
///
/// ```
/// use elgato_lib::response::Settings;
///
/// let json = r#"{
///     "powerOnBehavior": 1,
///     "powerOnBrightness": 20,
///     "powerOnTemperature": 213,
///     "switchOnDurationMs": 100,
///     "switchOffDurationMs": 300,
///     "colorChangeDurationMs": 100
/// }"#;
/// let settings: Settings = serde_json::from_str(json).unwrap();
/// assert_eq!(settings.power_on_brightness(), 20);
/// assert!(settings.battery().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    power_on_behavior: u8,
    power_on_brightness: u8,
    #[serde(default)]
    power_on_temperature: Option<u16>,
    #[serde(default)]
    power_on_hue: Option<f64>,
    #[serde(default)]
    power_on_saturation: Option<f64>,
    switch_on_duration_ms: u32,
    switch_off_duration_ms: u32,
    color_change_duration_ms: u32,
    #[serde(default)]
    battery: Option<BatterySettings>,
}

impl Settings {
    /// Returns the power-on behavior code (1 = restore last, 2 = use power-on values).
    #[must_use]
    pub fn power_on_behavior(&self) -> u8 {
        self.power_on_behavior
    }

    /// Returns the brightness applied at power-on.
    #[must_use]
    pub fn power_on_brightness(&self) -> u8 {
        self.power_on_brightness
    }

    /// Returns the color temperature applied at power-on.
    #[must_use]
    pub fn power_on_temperature(&self) -> Option<u16> {
        self.power_on_temperature
    }

    /// Returns the hue applied at power-on (color devices only).
    #[must_use]
    pub fn power_on_hue(&self) -> Option<f64> {
        self.power_on_hue
    }

    /// Returns the saturation applied at power-on (color devices only).
    #[must_use]
    pub fn power_on_saturation(&self) -> Option<f64> {
        self.power_on_saturation
    }

    /// Returns the fade-in duration in milliseconds.
    #[must_use]
    pub fn switch_on_duration_ms(&self) -> u32 {
        self.switch_on_duration_ms
    }

    /// Returns the fade-out duration in milliseconds.
    #[must_use]
    pub fn switch_off_duration_ms(&self) -> u32 {
        self.switch_off_duration_ms
    }

    /// Returns the color transition duration in milliseconds.
    #[must_use]
    pub fn color_change_duration_ms(&self) -> u32 {
        self.color_change_duration_ms
    }

    /// Returns the battery settings, present only on battery-powered devices.
    #[must_use]
    pub fn battery(&self) -> Option<&BatterySettings> {
        self.battery.as_ref()
    }
}

/// Battery section of the settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterySettings {
    energy_saving: EnergySavingSettings,
    #[serde(with = "int_bool")]
    bypass: bool,
}

impl BatterySettings {
    /// Returns the energy saving configuration.
    #[must_use]
    pub fn energy_saving(&self) -> &EnergySavingSettings {
        &self.energy_saving
    }

    /// Returns `true` if the battery is bypassed (studio mode).
    #[must_use]
    pub fn bypass(&self) -> bool {
        self.bypass
    }
}

/// Energy saving configuration of a battery-powered device.
///
/// Also used as the body of an energy saving update:
///
/// ```
/// use elgato_lib::response::EnergySavingSettings;
///
/// let config = EnergySavingSettings::default()
///     .with_enabled(true)
///     .with_minimum_battery_level(20.0)
///     .with_adjust_brightness(Some(10.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySavingSettings {
    #[serde(rename = "enable", with = "int_bool")]
    enabled: bool,
    minimum_battery_level: f64,
    #[serde(with = "int_bool")]
    disable_wifi: bool,
    adjust_brightness: AdjustBrightness,
}

impl Default for EnergySavingSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            minimum_battery_level: 15.0,
            disable_wifi: false,
            adjust_brightness: AdjustBrightness {
                enabled: false,
                brightness: 10.0,
            },
        }
    }
}

impl EnergySavingSettings {
    /// Enables or disables energy saving.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the battery level (percent) below which energy saving kicks in.
    #[must_use]
    pub fn with_minimum_battery_level(mut self, level: f64) -> Self {
        self.minimum_battery_level = level;
        self
    }

    /// Turns Wi-Fi off while energy saving is active.
    #[must_use]
    pub fn with_disable_wifi(mut self, disable_wifi: bool) -> Self {
        self.disable_wifi = disable_wifi;
        self
    }

    /// Dims the light to `brightness` while energy saving is active.
    ///
    /// `None` keeps the stored brightness but disables the adjustment.
    #[must_use]
    pub fn with_adjust_brightness(mut self, brightness: Option<f64>) -> Self {
        match brightness {
            Some(value) => {
                self.adjust_brightness = AdjustBrightness {
                    enabled: true,
                    brightness: value,
                };
            }
            None => self.adjust_brightness.enabled = false,
        }
        self
    }

    /// Returns `true` if energy saving is enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the minimum battery level in percent.
    #[must_use]
    pub fn minimum_battery_level(&self) -> f64 {
        self.minimum_battery_level
    }

    /// Returns `true` if Wi-Fi is turned off while saving energy.
    #[must_use]
    pub fn disable_wifi(&self) -> bool {
        self.disable_wifi
    }

    /// Returns the brightness adjustment.
    #[must_use]
    pub fn adjust_brightness(&self) -> &AdjustBrightness {
        &self.adjust_brightness
    }

    /// Checks the battery level (0-100) and adjusted brightness (3-100).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRangeFloat` for the first value out of range.
    pub fn validate(&self) -> Result<(), ValueError> {
        check_range("minimumBatteryLevel", self.minimum_battery_level, 0.0)?;
        check_range("adjustBrightness", self.adjust_brightness.brightness, 3.0)
    }
}

fn check_range(field: &'static str, value: f64, min: f64) -> Result<(), ValueError> {
    if (min..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValueError::OutOfRangeFloat {
            field,
            min,
            max: 100.0,
            actual: value,
        })
    }
}

/// Brightness adjustment while saving energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustBrightness {
    #[serde(rename = "enable", with = "int_bool")]
    enabled: bool,
    brightness: f64,
}

impl AdjustBrightness {
    /// Returns `true` if the adjustment is active.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the adjusted brightness.
    #[must_use]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }
}

/// Body of a battery settings update: `{"battery": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct BatteryUpdate<'a> {
    pub(crate) battery: BatteryUpdateBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) enum BatteryUpdateBody<'a> {
    #[serde(rename = "bypass")]
    Bypass(#[serde(with = "int_bool")] bool),
    #[serde(rename = "energySaving")]
    EnergySaving(&'a EnergySavingSettings),
}
