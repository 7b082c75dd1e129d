// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use signup_mock_server::config::parse_config;
use signup_mock_server::{build_app, MockSettings};

mod args;
use args::CliArgs;

#[async_std::main]
async fn main() -> Result<()> {
	tide::log::start();
	let args = CliArgs::parse();
	let config = parse_config(&args.config)?;

	let failing_emails = config.failing_emails();
	tide::log::info!("Sign-ups will fail for: {}", failing_emails.join(", "));
	let app = build_app(MockSettings::new(failing_emails));

	app.listen(config.listen_address).await.into_diagnostic()?;

	Ok(())
}
