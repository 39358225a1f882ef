use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// A request to the forum API failed. This is the only error clicks can run into.
#[derive(Debug, Error)]
pub enum RequestError {
	#[error("could not encode request body: {0}")]
	Encode(#[from] serde_json::Error),
	#[error("could not build request: {0}")]
	Build(String),
	#[error("request rejected: {0}")]
	Network(String),
	#[error("server responded with status {0}")]
	Status(u16),
}

/// Wiring the page up failed.
#[derive(Debug, Error)]
pub enum SetupError {
	#[error("no global `window` exists")]
	NoWindow,
	#[error("the window has no document")]
	NoDocument,
	#[error("could not add {event:?} listener: {message}")]
	Listen { event: &'static str, message: String },
}

/// Renders a thrown JavaScript value for log output.
pub(crate) fn describe(value: &JsValue) -> String {
	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		String::from(error.message())
	} else if let Some(string) = value.as_string() {
		string
	} else {
		format!("{:?}", value)
	}
}
