// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire envelope of the `/elgato/lights` resource.
//!
//! The device wraps light state in a list, both when reporting and when
//! receiving updates:
//!
//! ```json
//! {"numberOfLights": 1, "lights": [{"on": 1, "brightness": 21, "temperature": 297}]}
//! ```

use serde::{Deserialize, Serialize};

/// `{"numberOfLights": n, "lights": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LightsEnvelope<T> {
    #[serde(default)]
    pub(crate) number_of_lights: usize,
    pub(crate) lights: Vec<T>,
}

impl<T> LightsEnvelope<T> {
    /// Wraps a single light entry.
    pub(crate) fn single(light: T) -> Self {
        Self {
            number_of_lights: 1,
            lights: vec![light],
        }
    }

    /// Takes the first light entry.
    pub(crate) fn into_first(self) -> Option<T> {
        self.lights.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::state::{State, StateChange};
    use crate::types::PowerState;

    #[test]
    fn parse_state_envelope() {
        let json = r#"{"numberOfLights": 1, "lights": [{"on": 1, "brightness": 21, "temperature": 297}]}"#;
        let envelope: LightsEnvelope<State> = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.number_of_lights, 1);
        assert_eq!(
            envelope.into_first(),
            Some(State::new(PowerState::On, 21).with_temperature(297))
        );
    }

    #[test]
    fn parse_envelope_without_count() {
        let json = r#"{"lights": []}"#;
        let envelope: LightsEnvelope<State> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_first().is_none());
    }

    #[test]
    fn serialize_change_envelope() {
        let envelope = LightsEnvelope::single(StateChange::turn_on().with_brightness(100));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"numberOfLights": 1, "lights": [{"on": 1, "brightness": 100}]})
        );
    }
}
