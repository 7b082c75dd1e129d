// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SignUpRequestError;
use gloo_net::http::Request;
use signup_shared::messages::user_register::SignUpRequestBody;
use signup_shared::submission::SignUpApi;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.realworld.io/api/users";

/// Gets the URL sign-up requests are posted to. Builds can point at another API (such as the mock server) by setting
/// `SIGNUP_API_ENDPOINT` at compile time.
pub fn api_endpoint() -> &'static str {
	option_env!("SIGNUP_API_ENDPOINT").unwrap_or(DEFAULT_API_ENDPOINT)
}

/// Sends sign-up requests to the API over HTTP
pub struct HttpSignUpApi {
	endpoint: &'static str,
}

impl HttpSignUpApi {
	pub fn new(endpoint: &'static str) -> Self {
		Self { endpoint }
	}
}

impl SignUpApi for HttpSignUpApi {
	type Error = SignUpRequestError;

	async fn sign_up(&self, body: &SignUpRequestBody) -> Result<(), Self::Error> {
		let response = Request::post(self.endpoint).json(body)?.send().await?;
		if response.ok() {
			Ok(())
		} else {
			Err(SignUpRequestError::Status(response.status(), response.status_text()))
		}
	}
}
