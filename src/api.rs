//! The forum API as seen from the page: four JSON `POST` endpoints whose response bodies are ignored.

use crate::error::{describe, RequestError};
use core::{future::Future, pin::Pin};
use serde::Serialize;
use tracing::{instrument, trace};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
	Upvote,
	Downvote,
	Subscribe,
	Unsubscribe,
}

impl Endpoint {
	#[must_use]
	pub fn path(self) -> &'static str {
		match self {
			Endpoint::Upvote => "/api/v1/upvote",
			Endpoint::Downvote => "/api/v1/downvote",
			Endpoint::Subscribe => "/api/v1/subscribe",
			Endpoint::Unsubscribe => "/api/v1/unsubscribe",
		}
	}

	/// Joins `base` (with or without a trailing `/`) and this endpoint's path.
	#[must_use]
	pub fn url(self, base: &str) -> String {
		format!("{}{}", base.trim_end_matches('/'), self.path())
	}
}

/// Body of an up- or downvote. Ids are sent exactly as they appear in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteBody<'a> {
	pub id: &'a str,
	#[serde(rename = "type")]
	pub post_type: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionBody<'a> {
	pub channel_id: &'a str,
	pub user_id: &'a str,
}

pub type PostFuture = Pin<Box<dyn Future<Output = Result<(), RequestError>>>>;

/// Sends JSON bodies somewhere. Resolves to `Ok(())` only for 2xx responses.
pub trait Transport {
	fn post_json(&self, url: &str, body: String) -> PostFuture;
}

/// Encodes `body` and posts it to `endpoint` below `base_url`.
///
/// # Errors
///
/// Iff encoding fails or `transport` reports a failure.
pub async fn send<T: Serialize + ?Sized>(transport: &dyn Transport, base_url: &str, endpoint: Endpoint, body: &T) -> Result<(), RequestError> {
	let body = serde_json::to_string(body)?;
	let url = endpoint.url(base_url);
	trace!("POST {}", url);
	transport.post_json(&url, body).await
}

/// [`Transport`] over the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl Transport for FetchTransport {
	#[instrument(skip(body))]
	fn post_json(&self, url: &str, body: String) -> PostFuture {
		let request = post_request(url, &body);
		let future: PostFuture = Box::pin(async move {
			let request = request?;
			let window = web_sys::window().ok_or_else(|| RequestError::Build("no global `window` exists".to_owned()))?;
			let response = JsFuture::from(window.fetch_with_request(&request))
				.await
				.map_err(|error| RequestError::Network(describe(&error)))?;
			let response = response.dyn_into::<Response>().map_err(|value| RequestError::Network(describe(&value)))?;
			if response.ok() {
				Ok(())
			} else {
				Err(RequestError::Status(response.status()))
			}
		});
		future
	}
}

/// The `fetch` request [`FetchTransport`] sends: a `POST` of `body` as `application/json`.
///
/// # Errors
///
/// Iff the browser refuses to construct the request, for example for a malformed `url`.
pub fn post_request(url: &str, body: &str) -> Result<Request, RequestError> {
	let build_error = |error: JsValue| RequestError::Build(describe(&error));

	let headers = Headers::new().map_err(build_error)?;
	headers.set("Content-Type", "application/json").map_err(build_error)?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_headers(&headers);
	init.set_body(&JsValue::from_str(body));
	Request::new_with_str_and_init(url, &init).map_err(build_error)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn urls_are_joined_without_double_slashes() {
		assert_eq!(Endpoint::Upvote.url("http://localhost:8000"), "http://localhost:8000/api/v1/upvote");
		assert_eq!(Endpoint::Downvote.url("http://localhost:8000/"), "http://localhost:8000/api/v1/downvote");
		assert_eq!(Endpoint::Unsubscribe.url(""), "/api/v1/unsubscribe");
	}

	#[test]
	fn vote_body_uses_type_key() {
		let body = serde_json::to_value(VoteBody { id: "12", post_type: "comment" }).unwrap();
		assert_eq!(body, serde_json::json!({ "id": "12", "type": "comment" }));
	}

	#[test]
	fn subscription_body_is_camel_case() {
		let body = serde_json::to_value(SubscriptionBody { channel_id: "3", user_id: "9" }).unwrap();
		assert_eq!(body, serde_json::json!({ "channelId": "3", "userId": "9" }));
	}
}
