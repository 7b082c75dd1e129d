// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::user_register::{SignUpRequest, SignUpResult};
use crate::submission::SubmitError;
use crate::validation::{validate_email, validate_password, ValidationError};
use std::collections::HashMap;

/// The inputs of the sign-up form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
	Username,
	Email,
	Password,
}

impl Field {
	pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];

	/// The visible label of the field's input
	pub fn label(&self) -> &'static str {
		match self {
			Self::Username => "User Name",
			Self::Email => "Email Address",
			Self::Password => "Password",
		}
	}

	/// Runs the validation rule associated with the field, if it has one
	pub fn validate(&self, value: &str) -> Option<ValidationError> {
		match self {
			Self::Username => None,
			Self::Email => validate_email(value),
			Self::Password => validate_password(value),
		}
	}
}

/// Where the form is in its submission lifecycle
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SignUpStatus {
	#[default]
	Idle,
	Submitting,
	Success,
	Failure,
}

impl SignUpStatus {
	/// The status message shown under the form, if the status has one
	pub fn message(&self) -> Option<&'static str> {
		match self {
			Self::Success => Some("Sign Up Successfully!"),
			Self::Failure => Some("Error Signing Up!"),
			Self::Idle | Self::Submitting => None,
		}
	}
}

impl From<SignUpResult> for SignUpStatus {
	fn from(result: SignUpResult) -> Self {
		match result {
			SignUpResult::Success => Self::Success,
			SignUpResult::Failure => Self::Failure,
		}
	}
}

/// Values, validation results, and status of one sign-up form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormState {
	username: String,
	email: String,
	password: String,
	/// Contains an entry only for fields that have been validated at least once
	errors: HashMap<Field, Option<ValidationError>>,
	status: SignUpStatus,
}

impl FormState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Username => &self.username,
			Field::Email => &self.email,
			Field::Password => &self.password,
		}
	}

	/// Replaces the value of a field. Any error already shown for the field stays until it's validated again.
	pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
		let value = value.into();
		match field {
			Field::Username => self.username = value,
			Field::Email => self.email = value,
			Field::Password => self.password = value,
		}
	}

	/// Validates the current value of a field and records the result for display
	pub fn validate_field(&mut self, field: Field) {
		let error = field.validate(self.value(field));
		self.errors.insert(field, error);
	}

	/// Gets the error to display for a field. Fields that haven't been validated yet have no error.
	pub fn error(&self, field: Field) -> Option<ValidationError> {
		self.errors.get(&field).copied().flatten()
	}

	pub fn has_been_validated(&self, field: Field) -> bool {
		self.errors.contains_key(&field)
	}

	pub fn status(&self) -> SignUpStatus {
		self.status
	}

	/// Whether the current values can be sent. This is computed fresh from the values rather than from the recorded
	/// errors, so fields that haven't been blurred are still checked.
	pub fn is_submittable(&self) -> bool {
		Field::ALL
			.iter()
			.all(|field| !self.value(*field).is_empty() && field.validate(self.value(*field)).is_none())
	}

	/// Whether the submit control should be disabled
	pub fn submit_disabled(&self) -> bool {
		!self.is_submittable() || matches!(self.status, SignUpStatus::Submitting | SignUpStatus::Success)
	}

	/// Moves the form into the submitting state and builds the request from the current values.
	///
	/// # Errors
	///
	/// Fails without changing the state when a submission is already in flight, when the account was already created, or
	/// when the values can't be submitted.
	pub fn begin_submission(&mut self) -> Result<SignUpRequest, SubmitError> {
		match self.status {
			SignUpStatus::Submitting => return Err(SubmitError::AlreadySubmitting),
			SignUpStatus::Success => return Err(SubmitError::AlreadySignedUp),
			SignUpStatus::Idle | SignUpStatus::Failure => (),
		}
		if !self.is_submittable() {
			return Err(SubmitError::NotSubmittable);
		}

		self.status = SignUpStatus::Submitting;
		Ok(SignUpRequest {
			username: self.username.clone(),
			email: self.email.clone(),
			password: self.password.clone(),
		})
	}

	/// Records the outcome of the in-flight submission
	pub fn finish_submission(&mut self, result: SignUpResult) {
		if self.status != SignUpStatus::Submitting {
			log::warn!("Discarding sign-up result {:?} with no submission in flight", result);
			return;
		}
		self.status = result.into();
	}
}
