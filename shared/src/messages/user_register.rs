// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Account data sent when signing up
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignUpRequest {
	pub username: String,
	pub email: String,
	pub password: String,
}

/// Wire format of the sign-up request; the API expects the account data nested under `user`
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignUpRequestBody {
	pub user: SignUpRequest,
}

impl From<SignUpRequest> for SignUpRequestBody {
	fn from(user: SignUpRequest) -> Self {
		Self { user }
	}
}

/// Outcome of a single sign-up attempt
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignUpResult {
	Success,
	Failure,
}
