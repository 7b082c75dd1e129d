// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::home::HomeView;
use crate::api::{api_endpoint, HttpSignUpApi};
use crate::dom::event_input_value;
use crate::page_utils::set_page_title;
use signup_shared::form::{Field, FormState, SignUpStatus};
use signup_shared::submission::send_sign_up;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

fn input_id(field: Field) -> &'static str {
	match field {
		Field::Username => "sign_up_username",
		Field::Email => "sign_up_email",
		Field::Password => "sign_up_password",
	}
}

fn input_type(field: Field) -> &'static str {
	match field {
		Field::Username => "text",
		Field::Email => "email",
		Field::Password => "password",
	}
}

#[derive(Prop)]
pub struct FieldInputProps<'a> {
	form: &'a Signal<FormState>,
	field: Field,
}

/// A labeled input for one form field, with that field's validation message shown after it's been blurred
#[component]
pub fn FieldInput<'a, G: Html>(ctx: Scope<'a>, props: FieldInputProps<'a>) -> View<G> {
	let form = props.form;
	let field = props.field;
	let error_signal = create_memo(ctx, move || form.get().error(field));
	let error_class_signal = create_memo(ctx, move || if error_signal.get().is_some() { "error" } else { "" });

	let input_handler = move |event: WebEvent| {
		if let Some(value) = event_input_value(&event) {
			form.modify().set_field(field, value);
		}
	};
	let blur_handler = move |_event: WebEvent| {
		form.modify().validate_field(field);
	};

	view! {
		ctx,
		div(class="input_with_message") {
			label(for=input_id(field)) { (field.label()) }
			input(
				id=input_id(field),
				type=input_type(field),
				class=*error_class_signal.get(),
				on:input=input_handler,
				on:blur=blur_handler
			)
			(
				if let Some(error) = *error_signal.get() {
					view! {
						ctx,
						span(class="input_error") { (error.to_string()) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}

#[component]
pub fn SignUpView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title::<G>("Sign Up");

	let form = create_signal(ctx, FormState::new());
	view! {
		ctx,
		SignUpForm(form=form)
	}
}

#[derive(Prop)]
pub struct SignUpFormProps<'a> {
	form: &'a Signal<FormState>,
}

/// The sign-up form for the given state, followed by the submission status and, once signed up, the home view
#[component]
pub fn SignUpForm<'a, G: Html>(ctx: Scope<'a>, props: SignUpFormProps<'a>) -> View<G> {
	let form = props.form;
	let status_signal = create_memo(ctx, move || form.get().status());
	let submit_disabled_signal = create_memo(ctx, move || form.get().submit_disabled());

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let request = match form.modify().begin_submission() {
			Ok(request) => request,
			Err(error) => {
				log::debug!("Not submitting sign-up form: {}", error);
				return;
			}
		};

		spawn_local_scoped(ctx, async move {
			let api = HttpSignUpApi::new(api_endpoint());
			let result = send_sign_up(&api, request).await;
			form.modify().finish_submission(result);
		});
	};

	view! {
		ctx,
		h1 { "Sign Up" }
		form(id="sign_up", on:submit=form_submission_handler) {
			FieldInput(form=form, field=Field::Username)
			FieldInput(form=form, field=Field::Email)
			FieldInput(form=form, field=Field::Password)
			button(type="submit", disabled=*submit_disabled_signal.get()) { "Sign Up" }
		}
		(
			match status_signal.get().message() {
				Some(message) => {
					let status_class = if *status_signal.get() == SignUpStatus::Success { "success" } else { "failure" };
					view! {
						ctx,
						div(id="sign_up_status", class=status_class) { (message) }
					}
				}
				None => view! { ctx, },
			}
		)
		(
			if *status_signal.get() == SignUpStatus::Success {
				view! { ctx, HomeView {} }
			} else {
				view! { ctx, }
			}
		)
	}
}
