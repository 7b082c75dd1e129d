// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_json::{json, Value};
use signup_mock_server::{build_app, MockSettings};
use tide::http::{Body, Method, Request, Response, StatusCode, Url};

fn mock_app() -> tide::Server<()> {
	build_app(MockSettings::new(vec![String::from("fail@example.com")]))
}

fn sign_up_request(body: Body) -> Request {
	let url = Url::parse("http://localhost/api/users").unwrap();
	let mut request = Request::new(Method::Post, url);
	request.set_body(body);
	request
}

async fn post_user(user: Value) -> Response {
	let request = sign_up_request(Body::from_json(&json!({ "user": user })).unwrap());
	mock_app().respond(request).await.unwrap()
}

#[async_std::test]
async fn accepts_valid_sign_up() {
	let mut response = post_user(json!({
		"username": "Jamal SaadEddin",
		"email": "jamalsaadeddin27@gmail.com",
		"password": "123456789"
	}))
	.await;
	assert_eq!(response.status(), StatusCode::Ok);
	let body: Value = response.body_json().await.unwrap();
	assert_eq!(body, json!({}));
}

#[async_std::test]
async fn fails_for_configured_address() {
	let response = post_user(json!({
		"username": "Jamal SaadEddin",
		"email": "fail@example.com",
		"password": "123456789"
	}))
	.await;
	assert_eq!(response.status(), StatusCode::InternalServerError);
}

#[async_std::test]
async fn rejects_values_the_form_would_not_send() {
	let response = post_user(json!({
		"username": "Jamal SaadEddin",
		"email": "invalidEmail@",
		"password": "123456789"
	}))
	.await;
	assert_eq!(response.status(), StatusCode::UnprocessableEntity);

	let response = post_user(json!({
		"username": "Jamal SaadEddin",
		"email": "jamalsaadeddin27@gmail.com",
		"password": "123"
	}))
	.await;
	assert_eq!(response.status(), StatusCode::UnprocessableEntity);

	let response = post_user(json!({
		"username": "",
		"email": "jamalsaadeddin27@gmail.com",
		"password": "123456789"
	}))
	.await;
	assert_eq!(response.status(), StatusCode::UnprocessableEntity);
}

#[async_std::test]
async fn rejects_body_without_user_wrapper() {
	let body = Body::from_json(&json!({
		"username": "Jamal SaadEddin",
		"email": "jamalsaadeddin27@gmail.com",
		"password": "123456789"
	}))
	.unwrap();
	let response: Response = mock_app().respond(sign_up_request(body)).await.unwrap();
	assert_eq!(response.status(), StatusCode::BadRequest);
}

#[async_std::test]
async fn only_post_is_routed() {
	let url = Url::parse("http://localhost/api/users").unwrap();
	let response: Response = mock_app().respond(Request::new(Method::Get, url)).await.unwrap();
	assert_eq!(response.status(), StatusCode::MethodNotAllowed);
}
