// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light control.
//!
//! Elgato lights accept brightness as a percentage between 3 and 100. Lower
//! values are not accepted by the firmware; turning the light off is done
//! through the power field instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Brightness level as a percentage (3-100).
///
/// # Examples
///
/// ```
/// use elgato_lib::types::Brightness;
///
/// let bri = Brightness::new(75).unwrap();
/// assert_eq!(bri.value(), 75);
///
/// assert_eq!(Brightness::MIN.value(), 3);
/// assert_eq!(Brightness::MAX.value(), 100);
///
/// assert!(Brightness::new(2).is_err());
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    /// Lowest brightness accepted by the device.
    pub const MIN: Self = Self(3);

    /// Full brightness.
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [3, 100].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValueError::OutOfRange {
                field: "brightness",
                min: u32::from(Self::MIN.0),
                max: u32::from(Self::MAX.0),
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// ```
    /// use elgato_lib::types::Brightness;
    ///
    /// assert_eq!(Brightness::clamped(0).value(), 3);
    /// assert_eq!(Brightness::clamped(150).value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
