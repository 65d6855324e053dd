// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! White-light devices (Key Light, Ring Light) are driven by a color
//! temperature in mireds. Color devices (Light Strip) are driven by hue and
//! saturation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Color temperature in mireds (143-344).
///
/// Lower values are cooler, higher values are warmer:
///
/// - 143 (~7000K) - Cool daylight
/// - 213 (~4700K) - Neutral white
/// - 344 (~2900K) - Warm white
///
/// # Examples
///
/// ```
/// use elgato_lib::types::ColorTemperature;
///
/// let ct = ColorTemperature::new(297).unwrap();
/// assert_eq!(ct.value(), 297);
/// assert_eq!(ct.to_kelvin(), 3367);
///
/// assert!(ColorTemperature::new(100).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Minimum color temperature (coolest, ~7000K).
    pub const MIN: u16 = 143;

    /// Maximum color temperature (warmest, ~2900K).
    pub const MAX: u16 = 344;

    /// Cool daylight.
    pub const COOL: Self = Self(143);

    /// Neutral white.
    pub const NEUTRAL: Self = Self(213);

    /// Warm white.
    pub const WARM: Self = Self(344);

    /// Creates a new color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [143, 344].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                field: "temperature",
                min: u32::from(Self::MIN),
                max: u32::from(Self::MAX),
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the color temperature in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the approximate color temperature in Kelvin.
    #[must_use]
    pub fn to_kelvin(&self) -> u32 {
        1_000_000 / u32::from(self.0)
    }

    /// Creates a color temperature from a Kelvin value.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting mired value is outside the valid range.
    ///
    /// ```
    /// use elgato_lib::types::ColorTemperature;
    ///
    /// assert_eq!(ColorTemperature::from_kelvin(5000).unwrap().value(), 200);
    /// assert!(ColorTemperature::from_kelvin(2000).is_err());
    /// ```
    pub fn from_kelvin(kelvin: u32) -> Result<Self, ValueError> {
        let out_of_range = ValueError::OutOfRange {
            field: "temperature",
            min: u32::from(Self::MIN),
            max: u32::from(Self::MAX),
            actual: 0,
        };
        if kelvin == 0 {
            return Err(out_of_range);
        }
        let mireds = u16::try_from(1_000_000 / kelvin).map_err(|_| out_of_range)?;
        Self::new(mireds)
    }
}

impl Default for ColorTemperature {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.to_kelvin())
    }
}

/// Hue in degrees (0.0-360.0).
///
/// ```
/// use elgato_lib::types::Hue;
///
/// assert_eq!(Hue::new(40.0).unwrap().value(), 40.0);
/// assert!(Hue::new(361.0).is_err());
/// assert!(Hue::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hue(f64);

impl Hue {
    /// Maximum hue value.
    pub const MAX: f64 = 360.0;

    /// Creates a new hue value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRangeFloat` if value is outside [0, 360]
    /// or not a number.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        check_float("hue", value, Self::MAX).map(Self)
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Saturation as a percentage (0.0-100.0).
///
/// ```
/// use elgato_lib::types::Saturation;
///
/// assert_eq!(Saturation::new(15.0).unwrap().value(), 15.0);
/// assert!(Saturation::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Saturation(f64);

impl Saturation {
    /// Maximum saturation value.
    pub const MAX: f64 = 100.0;

    /// Creates a new saturation value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRangeFloat` if value is outside [0, 100]
    /// or not a number.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        check_float("saturation", value, Self::MAX).map(Self)
    }

    /// Returns the saturation percentage.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

fn check_float(field: &'static str, value: f64, max: f64) -> Result<f64, ValueError> {
    // NaN fails `contains`
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValueError::OutOfRangeFloat {
            field,
            min: 0.0,
            max,
            actual: value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_temperature_bounds() {
        assert!(ColorTemperature::new(ColorTemperature::MIN).is_ok());
        assert!(ColorTemperature::new(ColorTemperature::MAX).is_ok());
        assert!(ColorTemperature::new(142).is_err());
        assert!(ColorTemperature::new(345).is_err());
    }

    #[test]
    fn color_temperature_error_names_field() {
        let err = ColorTemperature::new(500).unwrap_err();
        assert_eq!(err.to_string(), "temperature value 500 is out of range [143, 344]");
    }

    #[test]
    fn color_temperature_kelvin_round_trip() {
        let ct = ColorTemperature::from_kelvin(4000).unwrap();
        assert_eq!(ct.value(), 250);
        assert_eq!(ct.to_kelvin(), 4000);
    }

    #[test]
    fn color_temperature_from_zero_kelvin() {
        assert!(ColorTemperature::from_kelvin(0).is_err());
        assert!(ColorTemperature::from_kelvin(1).is_err());
    }

    #[test]
    fn color_temperature_display() {
        assert_eq!(ColorTemperature::new(250).unwrap().to_string(), "4000K");
    }

    #[test]
    fn hue_bounds() {
        assert!(Hue::new(0.0).is_ok());
        assert!(Hue::new(360.0).is_ok());
        assert!(Hue::new(-0.1).is_err());
        assert!(Hue::new(f64::INFINITY).is_err());
    }

    #[test]
    fn saturation_bounds() {
        assert!(Saturation::new(0.0).is_ok());
        assert!(Saturation::new(100.0).is_ok());
        assert!(Saturation::new(100.5).is_err());
        assert!(Saturation::new(f64::NAN).is_err());
    }
}
