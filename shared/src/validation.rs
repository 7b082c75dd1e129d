// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-field validation rules for the sign-up form.
//!
//! Every rule is a pure function of a single field's value. A rule returning [None] means the value is acceptable.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const PASSWORD_MINIMUM_LENGTH: usize = 8;

/// The "valid e-mail address" grammar from the HTML standard, except that the domain must contain at least one dot.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
	)
	.expect("email pattern is a valid regular expression")
});

/// A problem with the value of a single field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	InvalidEmail,
	PasswordTooShort,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidEmail => write!(f, "Enter a valid email"),
			Self::PasswordTooShort => write!(
				f,
				"Password should be of minimum {} characters length",
				PASSWORD_MINIMUM_LENGTH
			),
		}
	}
}

/// Checks the format of an email address. An empty value isn't reported; requiring a value is handled by the form.
pub fn validate_email(value: &str) -> Option<ValidationError> {
	if value.is_empty() || EMAIL_PATTERN.is_match(value) {
		None
	} else {
		Some(ValidationError::InvalidEmail)
	}
}

/// Checks that a password is long enough. Length is counted in characters rather than bytes.
pub fn validate_password(value: &str) -> Option<ValidationError> {
	if value.chars().count() < PASSWORD_MINIMUM_LENGTH {
		Some(ValidationError::PasswordTooShort)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_well_formed_addresses() {
		for address in [
			"jamalsaadeddin27@gmail.com",
			"fail@example.com",
			"first.last@sub.example.org",
			"a+tag@x.io",
			"o'brien@mail-host.co.uk",
		] {
			assert_eq!(validate_email(address), None, "{} should be valid", address);
		}
	}

	#[test]
	fn rejects_malformed_addresses() {
		for address in [
			"invalidEmail@",
			"no-at-sign.com",
			"user@localhost",
			"@example.com",
			"user@@example.com",
			"user@-example.com",
			"user@example..com",
			"user@example.com.",
			"user name@example.com",
			"user@exa mple.com",
		] {
			assert_eq!(
				validate_email(address),
				Some(ValidationError::InvalidEmail),
				"{} should be invalid",
				address
			);
		}
	}

	#[test]
	fn empty_email_is_not_reported() {
		assert_eq!(validate_email(""), None);
	}

	#[test]
	fn password_length_boundary() {
		assert_eq!(validate_password(""), Some(ValidationError::PasswordTooShort));
		assert_eq!(validate_password("123"), Some(ValidationError::PasswordTooShort));
		assert_eq!(validate_password("1234567"), Some(ValidationError::PasswordTooShort));
		assert_eq!(validate_password("12345678"), None);
		assert_eq!(validate_password("123456789"), None);
	}

	#[test]
	fn password_length_counts_characters() {
		// Seven characters, but more than eight bytes
		assert_eq!(validate_password("ééééééé"), Some(ValidationError::PasswordTooShort));
		assert_eq!(validate_password("éééééééé"), None);
	}

	#[test]
	fn error_messages() {
		assert_eq!(ValidationError::InvalidEmail.to_string(), "Enter a valid email");
		assert_eq!(
			ValidationError::PasswordTooShort.to_string(),
			"Password should be of minimum 8 characters length"
		);
	}
}
