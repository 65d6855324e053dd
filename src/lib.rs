// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `elgato_lib` - An async Rust client for Elgato lights.
//!
//! This library talks to the local HTTP API (port 9123) of Elgato Key
//! Light, Key Light Air, Key Light Mini, Ring Light and Light Strip devices.
//!
//! # Supported Features
//!
//! - **Light control**: power, brightness, color temperature, hue/saturation
//! - **Device info**: product, firmware, serial number, display name
//! - **Settings**: power-on defaults and transition durations
//! - **Battery**: readings, bypass and energy saving (Key Light Mini)
//! - **Maintenance**: identify (blink) and restart
//!
//! # Quick Start
//!
//! ```no_run
//! use elgato_lib::Elgato;
//! use elgato_lib::state::StateChange;
//!
//! #[tokio::main]
//! async fn main() -> elgato_lib::Result<()> {
//!     let light = Elgato::new("elgato-key-light.local")?;
//!
//!     let info = light.get_info().await?;
//!     println!("{} ({})", info.display_name(), info.product_name());
//!
//!     let change = StateChange::turn_on()
//!         .with_brightness(50)
//!         .with_temperature(250);
//!     light.set_state(&change).await?;
//!
//!     light.close();
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every call returns [`Result`]. Out-of-range values are rejected with
//! [`Error::Validation`] before any request is sent; transport failures,
//! timeouts and bad responses each have their own variant.

mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use device::{Elgato, ElgatoBuilder, paths};
pub use error::{Error, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig, HttpResponse};
pub use response::{
    AdjustBrightness, BatteryInfo, BatterySettings, BatteryStatus, EnergySavingSettings, Info,
    PowerSource, Settings, WifiInfo,
};
pub use state::{State, StateChange, StateUpdate};
pub use types::{Brightness, ColorTemperature, Hue, PowerState, Saturation};
