// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur when sending a sign-up request
#[derive(Debug)]
pub enum SignUpRequestError {
	Http(gloo_net::Error),
	Status(u16, String),
}

impl From<gloo_net::Error> for SignUpRequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Http(error)
	}
}

impl fmt::Display for SignUpRequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Http(error) => write!(f, "The request couldn't be completed: {}", error),
			Self::Status(code, text) => write!(f, "The server responded with {} {}", code, text),
		}
	}
}
