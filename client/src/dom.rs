// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

/// Gets the current value of the input element an event was dispatched to
pub fn event_input_value(event: &Event) -> Option<String> {
	let target = event.target()?;
	let input: HtmlInputElement = target.dyn_into().ok()?;
	Some(input.value())
}
