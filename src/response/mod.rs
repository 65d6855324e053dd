// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed representations of the device's JSON resources.
//!
//! Light state lives in [`crate::state`]; this module covers the other
//! resources: accessory info, settings and battery info.

mod battery;
mod info;
mod lights;
mod settings;

pub use battery::{BatteryInfo, BatteryStatus, PowerSource};
pub use info::{Info, WifiInfo};
pub use settings::{AdjustBrightness, BatterySettings, EnergySavingSettings, Settings};

pub(crate) use info::DisplayNameUpdate;
pub(crate) use lights::LightsEnvelope;
pub(crate) use settings::{BatteryUpdate, BatteryUpdateBody};
