// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sending a completed form to the sign-up endpoint.
//!
//! The transport is abstracted behind [SignUpApi] so the browser client can use its HTTP stack while tests use an
//! in-process API.

use crate::form::FormState;
use crate::messages::user_register::{SignUpRequest, SignUpRequestBody, SignUpResult};
use std::fmt;

/// A way of delivering a sign-up request to the API
#[allow(async_fn_in_trait)]
pub trait SignUpApi {
	type Error: fmt::Display;

	/// Sends the request once. Any response outside of the 2xx range must be reported as an error.
	async fn sign_up(&self, body: &SignUpRequestBody) -> Result<(), Self::Error>;
}

/// Reasons a submission attempt is refused before anything is sent
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitError {
	NotSubmittable,
	AlreadySubmitting,
	AlreadySignedUp,
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotSubmittable => write!(f, "The form has missing or invalid values"),
			Self::AlreadySubmitting => write!(f, "A sign-up request is already in progress"),
			Self::AlreadySignedUp => write!(f, "The account has already been created"),
		}
	}
}

/// Sends a sign-up request and collapses every kind of failure into [SignUpResult::Failure].
pub async fn send_sign_up<A: SignUpApi>(api: &A, request: SignUpRequest) -> SignUpResult {
	log::info!("Sending sign-up request for {}", request.username);
	let body = SignUpRequestBody::from(request);
	match api.sign_up(&body).await {
		Ok(()) => {
			log::info!("Signed up {}", body.user.username);
			SignUpResult::Success
		}
		Err(error) => {
			log::warn!("Sign-up request for {} failed: {}", body.user.username, error);
			SignUpResult::Failure
		}
	}
}

/// Submits the form: checks that it can be sent, sends it, and records the outcome in the form.
///
/// # Errors
///
/// Returns an error without sending anything if the form refuses to begin a submission. A failed request is not an
/// error here; it's reported in the result and the form's status.
pub async fn submit<A: SignUpApi>(form: &mut FormState, api: &A) -> Result<SignUpResult, SubmitError> {
	let request = form.begin_submission()?;
	let result = send_sign_up(api, request).await;
	form.finish_submission(result);
	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::{Field, SignUpStatus};
	use futures::executor::block_on;
	use std::cell::RefCell;

	/// Behaves like the hosted API: accepts everyone except one address
	#[derive(Default)]
	struct RecordingApi {
		requests: RefCell<Vec<SignUpRequestBody>>,
	}

	impl SignUpApi for RecordingApi {
		type Error = &'static str;

		async fn sign_up(&self, body: &SignUpRequestBody) -> Result<(), Self::Error> {
			self.requests.borrow_mut().push(body.clone());
			if body.user.email == "fail@example.com" {
				Err("500 Internal Server Error")
			} else {
				Ok(())
			}
		}
	}

	fn form_with_email(email: &str) -> FormState {
		let mut form = FormState::new();
		form.set_field(Field::Username, "Jamal SaadEddin");
		form.set_field(Field::Email, email);
		form.set_field(Field::Password, "123456789");
		form
	}

	#[test]
	fn successful_sign_up() {
		let api = RecordingApi::default();
		let mut form = form_with_email("jamalsaadeddin27@gmail.com");

		let result = block_on(submit(&mut form, &api));
		assert_eq!(result, Ok(SignUpResult::Success));
		assert_eq!(form.status(), SignUpStatus::Success);
		assert_eq!(form.status().message(), Some("Sign Up Successfully!"));

		let requests = api.requests.borrow();
		assert_eq!(requests.len(), 1);
		assert_eq!(requests[0].user.username, "Jamal SaadEddin");
		assert_eq!(requests[0].user.email, "jamalsaadeddin27@gmail.com");
		assert_eq!(requests[0].user.password, "123456789");
	}

	#[test]
	fn failed_sign_up() {
		let api = RecordingApi::default();
		let mut form = form_with_email("fail@example.com");

		let result = block_on(submit(&mut form, &api));
		assert_eq!(result, Ok(SignUpResult::Failure));
		assert_eq!(form.status(), SignUpStatus::Failure);
		assert_eq!(form.status().message(), Some("Error Signing Up!"));
		assert_eq!(api.requests.borrow().len(), 1);
	}

	#[test]
	fn resubmitting_after_failure() {
		let api = RecordingApi::default();
		let mut form = form_with_email("fail@example.com");
		block_on(submit(&mut form, &api)).unwrap();

		form.set_field(Field::Email, "jamalsaadeddin27@gmail.com");
		let result = block_on(submit(&mut form, &api));
		assert_eq!(result, Ok(SignUpResult::Success));
		assert_eq!(api.requests.borrow().len(), 2);
	}

	#[test]
	fn invalid_form_sends_nothing() {
		let api = RecordingApi::default();
		let mut form = form_with_email("invalidEmail@");

		let result = block_on(submit(&mut form, &api));
		assert_eq!(result, Err(SubmitError::NotSubmittable));
		assert_eq!(form.status(), SignUpStatus::Idle);
		assert!(api.requests.borrow().is_empty());
	}
}
