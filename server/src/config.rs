// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knuffel::Decode;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::io::ErrorKind;

pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_FAILING_EMAIL: &str = "fail@example.com";

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	#[knuffel(child, unwrap(argument), default = String::from(DEFAULT_LISTEN_ADDRESS))]
	pub listen_address: String,
	#[knuffel(children(name = "failing-email"))]
	failing_emails: Vec<FailingEmail>,
}

/// An email address for which the mock API rejects sign-ups with a server error
#[derive(Debug, Decode)]
struct FailingEmail {
	#[knuffel(argument)]
	address: String,
}

impl ConfigDocument {
	/// Gets the addresses that should fail to sign up. When none are configured, the default failing address is used.
	pub fn failing_emails(&self) -> Vec<String> {
		if self.failing_emails.is_empty() {
			vec![String::from(DEFAULT_FAILING_EMAIL)]
		} else {
			self.failing_emails.iter().map(|email| email.address.clone()).collect()
		}
	}
}

/// Parses the KDL configuration document. A missing file gets the default configuration.
pub fn parse_config(config_path: &str) -> Result<ConfigDocument> {
	let config_file_contents = match fs::read_to_string(config_path) {
		Ok(contents) => contents,
		Err(error) if error.kind() == ErrorKind::NotFound => {
			tide::log::info!("No configuration found at {}; using defaults", config_path);
			String::new()
		}
		Err(error) => return Err(error).into_diagnostic(),
	};
	parse_config_str(config_path, &config_file_contents)
}

pub fn parse_config_str(file_name: &str, contents: &str) -> Result<ConfigDocument> {
	let config = knuffel::parse(file_name, contents)?;
	Ok(config)
}
