// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state and state changes.
//!
//! - [`State`] is what the device reports.
//! - [`StateChange`] is a partial update the caller sends.
//! - [`StateUpdate`] is what a state change returns.

mod light_state;
mod state_change;

pub use light_state::State;
pub use state_change::{StateChange, StateUpdate};
