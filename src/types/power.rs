// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of an Elgato light.
//!
//! The device encodes power (and every other boolean flag in its API) as the
//! integers `0` and `1`. [`PowerState`] serializes to that form and also
//! accepts JSON booleans when reading.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents the power state of a light.
///
/// # Examples
///
/// ```
/// use elgato_lib::types::PowerState;
///
/// assert_eq!(PowerState::from(true), PowerState::On);
/// assert_eq!(PowerState::On.as_num(), 1);
/// assert_eq!(PowerState::Off.toggled(), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerState {
    /// Light is off.
    #[default]
    Off,
    /// Light is on.
    On,
}

impl PowerState {
    /// Returns the numeric value used on the wire.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "OFF",
            Self::On => "ON",
        })
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<PowerState> for bool {
    fn from(value: PowerState) -> Self {
        value.is_on()
    }
}

impl Serialize for PowerState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_num())
    }
}

impl<'de> Deserialize<'de> for PowerState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from(int_bool::deserialize(deserializer)?))
    }
}

/// Serde helpers for the `0`/`1` booleans used throughout the device API.
pub(crate) mod int_bool {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Bool(bool),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Int(0) | Raw::Bool(false) => Ok(false),
            Raw::Int(1) | Raw::Bool(true) => Ok(true),
            Raw::Int(other) => Err(D::Error::custom(format!(
                "expected 0 or 1 for a boolean flag, got {other}"
            ))),
        }
    }
}
