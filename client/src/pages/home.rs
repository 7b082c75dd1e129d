// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use sycamore::prelude::*;

#[component]
pub fn HomeView<G: Html>(ctx: Scope) -> View<G> {
	set_page_title::<G>("Home");

	view! {
		ctx,
		div(id="home") {
			h1 { "Home" }
			p { "Your account is ready. Welcome aboard!" }
		}
	}
}
