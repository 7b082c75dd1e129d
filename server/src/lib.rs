// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A stand-in for the hosted sign-up API, for developing and testing the sign-up form without touching real accounts.

use async_std::sync::Arc;
use tide::Server;

mod api;
pub mod config;
pub use api::MockSettings;

/// Builds the mock API application with its routes attached
pub fn build_app(settings: MockSettings) -> Server<()> {
	let mut app = tide::new();
	api::add_routes(&mut app, Arc::new(settings));
	app
}
