// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery info parsing, from `/elgato/battery-info`.

use serde::{Deserialize, Serialize};

/// Where the device is drawing power from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PowerSource {
    /// Not reported.
    Unknown,
    /// Running from mains (USB-C).
    Mains,
    /// Running from the battery.
    Battery,
}

impl From<u8> for PowerSource {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Mains,
            2 => Self::Battery,
            _ => Self::Unknown,
        }
    }
}

impl From<PowerSource> for u8 {
    fn from(value: PowerSource) -> Self {
        match value {
            PowerSource::Unknown => 0,
            PowerSource::Mains => 1,
            PowerSource::Battery => 2,
        }
    }
}

/// Charging status of the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum BatteryStatus {
    /// Discharging.
    Draining,
    /// Charging.
    Charging,
    /// Determining the charge level.
    CheckingCharge,
    /// Any code not listed above.
    Unknown(u8),
}

impl From<u8> for BatteryStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Draining,
            2 => Self::Charging,
            3 => Self::CheckingCharge,
            other => Self::Unknown(other),
        }
    }
}

impl From<BatteryStatus> for u8 {
    fn from(value: BatteryStatus) -> Self {
        match value {
            BatteryStatus::Draining => 0,
            BatteryStatus::Charging => 2,
            BatteryStatus::CheckingCharge => 3,
            BatteryStatus::Unknown(other) => other,
        }
    }
}

/// Battery readings of a battery-powered device.
///
/// Raw readings are in millivolts, milliamps and milliwatts; the
/// `charge_*` accessors convert them to volts, amps and watts rounded to
/// two decimals.
///
/// # Examples
///
/// ```
/// use elgato_lib::response::{BatteryInfo, BatteryStatus, PowerSource};
///
/// let json = r#"{
///     "powerSource": 1,
///     "level": 78.57,
///     "status": 2,
///     "currentBatteryVoltage": 3860,
///     "inputChargeVoltage": 4208,
///     "inputChargeCurrent": 3008,
///     "inputChargePower": 12658
/// }"#;
/// let battery: BatteryInfo = serde_json::from_str(json).unwrap();
/// assert_eq!(battery.power_source(), PowerSource::Mains);
/// assert_eq!(battery.status(), BatteryStatus::Charging);
/// assert_eq!(battery.charge_voltage(), 4.21);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryInfo {
    power_source: PowerSource,
    level: f64,
    status: BatteryStatus,
    #[serde(default)]
    current_battery_voltage: Option<u32>,
    input_charge_voltage: u32,
    input_charge_current: u32,
    input_charge_power: u32,
}

impl BatteryInfo {
    /// Returns the power source.
    #[must_use]
    pub fn power_source(&self) -> PowerSource {
        self.power_source
    }

    /// Returns the charge level in percent.
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Returns the charging status.
    #[must_use]
    pub fn status(&self) -> BatteryStatus {
        self.status
    }

    /// Returns the battery voltage in millivolts, if reported.
    #[must_use]
    pub fn current_battery_voltage(&self) -> Option<u32> {
        self.current_battery_voltage
    }

    /// Returns the charge input voltage in millivolts.
    #[must_use]
    pub fn input_charge_voltage(&self) -> u32 {
        self.input_charge_voltage
    }

    /// Returns the charge input current in milliamps.
    #[must_use]
    pub fn input_charge_current(&self) -> u32 {
        self.input_charge_current
    }

    /// Returns the charge input power in milliwatts.
    #[must_use]
    pub fn input_charge_power(&self) -> u32 {
        self.input_charge_power
    }

    /// Returns the charge input voltage in volts.
    #[must_use]
    pub fn charge_voltage(&self) -> f64 {
        milli_to_unit(self.input_charge_voltage)
    }

    /// Returns the charge input current in amps.
    #[must_use]
    pub fn charge_current(&self) -> f64 {
        milli_to_unit(self.input_charge_current)
    }

    /// Returns the charge input power in watts.
    #[must_use]
    pub fn charge_power(&self) -> f64 {
        milli_to_unit(self.input_charge_power)
    }
}

fn milli_to_unit(value: u32) -> f64 {
    (f64::from(value) / 10.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINI: &str = r#"{
        "powerSource": 1,
        "level": 78.57,
        "status": 2,
        "currentBatteryVoltage": 3860,
        "inputChargeVoltage": 4208,
        "inputChargeCurrent": 3008,
        "inputChargePower": 12658
    }"#;

    #[test]
    #[allow(clippy::float_cmp)]
    fn parse_battery_info() {
        let battery: BatteryInfo = serde_json::from_str(MINI).unwrap();

        assert_eq!(battery.level(), 78.57);
        assert_eq!(battery.current_battery_voltage(), Some(3860));
        assert_eq!(battery.input_charge_voltage(), 4208);
        assert_eq!(battery.input_charge_current(), 3008);
        assert_eq!(battery.input_charge_power(), 12658);
        assert_eq!(battery.charge_voltage(), 4.21);
        assert_eq!(battery.charge_current(), 3.01);
        assert_eq!(battery.charge_power(), 12.66);
    }

    #[test]
    fn unknown_codes_are_kept() {
        assert_eq!(PowerSource::from(7), PowerSource::Unknown);
        assert_eq!(BatteryStatus::from(9), BatteryStatus::Unknown(9));
        assert_eq!(u8::from(BatteryStatus::Unknown(9)), 9);
    }

    #[test]
    fn battery_on_battery_power() {
        let json = MINI
            .replace("\"powerSource\": 1", "\"powerSource\": 2")
            .replace("\"status\": 2", "\"status\": 0");
        let battery: BatteryInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(battery.power_source(), PowerSource::Battery);
        assert_eq!(battery.status(), BatteryStatus::Draining);
    }
}
