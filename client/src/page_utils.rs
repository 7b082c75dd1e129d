// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::window;

const APPLICATION_NAME: &str = "Sign-Up";

/// Sets the document title for a page. Rendering outside of a browser has no document, so nothing is set there.
pub fn set_page_title<G: Html>(page_name: &str) {
	if !G::IS_BROWSER {
		return;
	}
	if let Some(document) = window().and_then(|window| window.document()) {
		document.set_title(&format!("{} | {}", page_name, APPLICATION_NAME));
	}
}
