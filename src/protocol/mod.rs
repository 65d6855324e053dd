// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Elgato lights.
//!
//! - [`HttpConfig`]: host, port, timeout and optional shared pool
//! - [`HttpClient`]: issues requests and classifies failures
//! - [`HttpResponse`]: a successful response with JSON decoding
//!
//! # Connection Pooling
//!
//! A [`reqwest::Client`] passed to [`HttpConfig::with_client`] is shared with
//! the caller and never released by this crate. Without one, the client
//! creates its own pool on first use and releases it on close.

mod http;

pub use http::{HttpClient, HttpConfig, HttpResponse};
