#![cfg(target_arch = "wasm32")]

use seenit_dom::{
	api::{self, Endpoint, FetchTransport, Transport, VoteBody},
	error::RequestError,
};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

use web_support_::init_logging;

#[wasm_bindgen_test]
async fn request_is_a_json_post() {
	init_logging();
	let request = api::post_request("http://localhost:8000/api/v1/upvote", r#"{"id":"7","type":"post"}"#).unwrap();

	assert_eq!(request.method(), "POST");
	assert_eq!(request.url(), "http://localhost:8000/api/v1/upvote");
	assert_eq!(request.headers().get("Content-Type").unwrap().as_deref(), Some("application/json"));

	let body = JsFuture::from(request.text().unwrap()).await.unwrap();
	assert_eq!(body.as_string().as_deref(), Some(r#"{"id":"7","type":"post"}"#));
}

#[wasm_bindgen_test]
fn malformed_url_is_a_build_error() {
	init_logging();
	assert!(matches!(api::post_request("http://[not a host", "{}"), Err(RequestError::Build(_))));
}

#[wasm_bindgen_test]
async fn error_status_is_a_failure() {
	init_logging();
	let result = FetchTransport.post_json("/seenit-dom/not-served/api/v1/upvote", "{}".to_owned()).await;
	assert!(matches!(result, Err(RequestError::Status(status)) if !(200..300).contains(&status)));
}

#[wasm_bindgen_test]
async fn unreachable_host_is_a_network_failure() {
	init_logging();
	let body = VoteBody { id: "7", post_type: "post" };
	let result = api::send(&FetchTransport, "http://seenit.invalid", Endpoint::Upvote, &body).await;
	assert!(matches!(result, Err(RequestError::Network(_))));
}
