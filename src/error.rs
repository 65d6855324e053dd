// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `elgato_lib` library.
//!
//! Every fallible operation returns [`Result<T>`], whose error is one of:
//!
//! - [`Error::Connection`]: the device could not be reached
//! - [`Error::Timeout`]: the device did not answer within the deadline
//! - [`Error::Response`]: the device answered with a bad status or body
//! - [`Error::Validation`]: a caller value was rejected before any request
//!
//! Battery operations additionally report [`Error::NoBattery`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure reaching the device.
    #[error("error occurred while communicating with the Elgato light: {0}")]
    Connection(String),

    /// The device did not respond before the deadline.
    #[error("timeout occurred while connecting to the Elgato light after {0} ms")]
    Timeout(u64),

    /// The device was reachable but returned an unusable response.
    #[error("unexpected response from the Elgato light (HTTP {status}): {message}")]
    Response {
        /// HTTP status code returned by the device.
        status: u16,
        /// What was wrong with the response.
        message: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// A caller-supplied value was rejected before sending.
    #[error("validation error: {0}")]
    Validation(#[from] ValueError),

    /// The device has no battery.
    #[error("the Elgato light does not have a battery")]
    NoBattery,

    /// Host and port do not form a valid URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Returns the HTTP status code for [`Error::Response`] errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body for [`Error::Response`] errors.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Response { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` for errors raised before any network I/O.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub(crate) fn response(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Response {
            status,
            message: message.into(),
            body: body.into(),
        }
    }
}

/// Errors related to value validation and constraints.
///
/// These errors occur when a value falls outside the range the device
/// documents for it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// An integer value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// A floating point value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRangeFloat {
        /// Name of the offending field.
        field: &'static str,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// A state change without any field set.
    #[error("state change has no fields set")]
    EmptyChange,

    /// Color temperature and hue/saturation were set in the same change.
    #[error("cannot set color temperature together with hue or saturation")]
    ConflictingColorModes,

    /// The display name is empty.
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            field: "brightness",
            min: 3,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "brightness value 150 is out of range [3, 100]");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::EmptyChange.into();
        assert!(matches!(err, Error::Validation(ValueError::EmptyChange)));
        assert!(err.is_validation());
    }

    #[test]
    fn response_error_accessors() {
        let err = Error::response(404, "HTTP 404 Not Found", "OMG PUPPIES!");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("OMG PUPPIES!"));
        assert_eq!(
            err.to_string(),
            "unexpected response from the Elgato light (HTTP 404): HTTP 404 Not Found"
        );
    }

    #[test]
    fn non_response_errors_have_no_status() {
        assert_eq!(Error::Timeout(8000).status(), None);
        assert!(Error::NoBattery.body().is_none());
    }

    #[test]
    fn no_battery_display() {
        assert_eq!(
            Error::NoBattery.to_string(),
            "the Elgato light does not have a battery"
        );
    }
}
