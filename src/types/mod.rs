// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Elgato light control.
//!
//! Each type ensures its value is within the range the device documents at
//! construction time.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off
//! - [`Brightness`] - Brightness level (3-100%)
//! - [`ColorTemperature`] - Color temperature in mireds (143-344)
//! - [`Hue`] - Hue in degrees (0-360)
//! - [`Saturation`] - Saturation (0-100%)

mod brightness;
mod color;
mod power;

pub use brightness::Brightness;
pub use color::{ColorTemperature, Hue, Saturation};
pub use power::PowerState;

pub(crate) use power::int_bool;
