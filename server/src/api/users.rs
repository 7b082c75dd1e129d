// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::MockSettings;
use async_std::sync::Arc;
use http_types::mime;
use signup_shared::form::Field;
use signup_shared::messages::user_register::SignUpRequestBody;
use tide::{Request, Response, StatusCode};

/// POST /api/users
///
/// Accepts a `{ "user": { "username", "email", "password" } }` body. Answers with an empty JSON object on success.
/// Values that the sign-up form wouldn't have allowed are rejected as unprocessable, and the configured failing
/// addresses get a server error.
pub async fn sign_up(mut request: Request<()>, settings: Arc<MockSettings>) -> tide::Result {
	let body: SignUpRequestBody = match request.body_json().await {
		Ok(body) => body,
		Err(error) => {
			tide::log::warn!("Received a malformed sign-up request: {}", error);
			return Err(tide::Error::new(
				StatusCode::BadRequest,
				anyhow::Error::msg("Malformed sign-up request"),
			));
		}
	};
	let user = body.user;

	let values = [
		(Field::Username, user.username.as_str()),
		(Field::Email, user.email.as_str()),
		(Field::Password, user.password.as_str()),
	];
	for (field, value) in values {
		if value.is_empty() {
			return Err(tide::Error::new(
				StatusCode::UnprocessableEntity,
				anyhow::Error::msg(format!("{} can't be blank", field.label())),
			));
		}
		if let Some(error) = field.validate(value) {
			return Err(tide::Error::new(
				StatusCode::UnprocessableEntity,
				anyhow::Error::msg(error.to_string()),
			));
		}
	}

	if settings.fails_for(&user.email) {
		tide::log::info!("Failing sign-up for {} as configured", user.email);
		return Err(tide::Error::new(
			StatusCode::InternalServerError,
			anyhow::Error::msg("Sign-up failed"),
		));
	}

	tide::log::info!("Signed up {} <{}>", user.username, user.email);
	let response = Response::builder(StatusCode::Ok)
		.content_type(mime::JSON)
		.body(serde_json::json!({}))
		.build();
	Ok(response)
}
