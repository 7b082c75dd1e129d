// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_std::sync::Arc;
use tide::security::CorsMiddleware;
use tide::Server;

mod users;
use users::sign_up;

/// Behavior switches for the mock API
pub struct MockSettings {
	failing_emails: Vec<String>,
}

impl MockSettings {
	pub fn new(failing_emails: Vec<String>) -> Self {
		Self { failing_emails }
	}

	/// Whether a sign-up for this address should be answered with a server error
	pub fn fails_for(&self, email: &str) -> bool {
		self.failing_emails.iter().any(|failing| failing == email)
	}
}

pub fn add_routes(app: &mut Server<()>, settings: Arc<MockSettings>) {
	app.with(CorsMiddleware::new());
	app.at("/api/users").post({
		let settings = Arc::clone(&settings);
		move |request| sign_up(request, Arc::clone(&settings))
	});
}
