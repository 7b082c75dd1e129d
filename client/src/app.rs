// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::pages::home::HomeView;
use crate::pages::not_found::NotFoundView;
use crate::pages::sign_up::SignUpView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
enum AppRoutes {
	#[to("/")]
	SignUp,
	#[to("/home")]
	Home,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					div(id="app") {
						(match route.get().as_ref() {
							AppRoutes::SignUp => view! { ctx, SignUpView {} },
							AppRoutes::Home => view! { ctx, HomeView {} },
							AppRoutes::NotFound => view! { ctx, NotFoundView {} },
						})
					}
				}
			}
		)
	}
}
