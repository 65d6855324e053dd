// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory info parsing.

use serde::{Deserialize, Serialize};

/// Identity of an Elgato light, from `/elgato/accessory-info`.
///
/// # Examples
///
/// ```
/// use elgato_lib::response::Info;
///
/// let json = r#"{
///     "productName": "Elgato Key Light",
///     "hardwareBoardType": 53,
///     "firmwareBuildNumber": 192,
///     "firmwareVersion": "1.0.3",
///     "serialNumber": "CN11A1A00001",
///     "displayName": "Frenck",
///     "features": ["lights"]
/// }"#;
/// let info: Info = serde_json::from_str(json).unwrap();
/// assert_eq!(info.product_name(), "Elgato Key Light");
/// assert_eq!(info.display_name(), "Frenck");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    product_name: String,
    hardware_board_type: u32,
    firmware_build_number: u32,
    firmware_version: String,
    serial_number: String,
    #[serde(default)]
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mac_address: Option<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(rename = "wifi-info", default, skip_serializing_if = "Option::is_none")]
    wifi: Option<WifiInfo>,
}

impl Info {
    /// Returns the product name, e.g. `Elgato Key Light`.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the board revision.
    #[must_use]
    pub fn hardware_board_type(&self) -> u32 {
        self.hardware_board_type
    }

    /// Returns the firmware build number.
    #[must_use]
    pub fn firmware_build_number(&self) -> u32 {
        self.firmware_build_number
    }

    /// Returns the firmware version string.
    #[must_use]
    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }

    /// Returns the serial number.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the user-configured display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the MAC address, if reported.
    #[must_use]
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    /// Returns the feature list, e.g. `["lights"]`.
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Returns the Wi-Fi details, if reported.
    #[must_use]
    pub fn wifi(&self) -> Option<&WifiInfo> {
        self.wifi.as_ref()
    }
}

/// Wi-Fi connection details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiInfo {
    /// Network name.
    pub ssid: String,
    /// Radio frequency.
    #[serde(rename = "frequencyMHz")]
    pub frequency_mhz: u32,
    /// Signal strength in dBm.
    pub rssi: i32,
}

/// Body of the display name update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DisplayNameUpdate<'a> {
    pub(crate) display_name: &'a str,
}
