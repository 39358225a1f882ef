#![doc(html_root_url = "https://docs.rs/seenit-dom/0.1.0")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Page scripting for Seenit forum pages.
//!
//! [`install`] wires up a document once it has loaded:
//!
//! - one delegated vote listener on the post container ([`vote`]),
//! - one listener per reply button ([`reply`]),
//! - optionally, one delegated listener per subscription container ([`subscribe`]).
//!
//! All dependencies are passed in explicitly, so the handlers work on any document and with any [`api::Transport`].

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod api;
pub mod config;
pub mod error;
pub mod listener;
pub mod reply;
pub mod subscribe;
pub mod vote;

use api::Transport;
use config::Config;
use error::SetupError;
use listener::Listener;
use std::rc::Rc;
use subscribe::SubscribeHandler;
use tracing::{info, instrument, warn};
use vote::VoteHandler;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Window};

/// All listeners [`install`] added. Dropping this removes them again.
#[derive(Debug)]
#[must_use = "Dropping `Bindings` removes all listeners."]
pub struct Bindings {
	listeners: Vec<Listener>,
}

impl Bindings {
	/// Number of listeners currently attached.
	#[must_use]
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	/// Whether nothing on the page was wired up.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}
}

/// Wires up the vote, reply and (if enabled) subscription handlers for `document`.
///
/// A missing post container isn't an error, since not every page lists posts; votes just aren't handled then.
///
/// # Errors
///
/// Iff a listener can't be added.
#[instrument(skip(document, transport))]
pub fn install(document: &Document, config: Config, transport: Rc<dyn Transport>) -> Result<Bindings, SetupError> {
	let config = Rc::new(config);
	let mut listeners = Vec::new();

	match document.get_element_by_id(&config.post_container_id) {
		Some(container) => listeners.push(VoteHandler::new(Rc::clone(&config), Rc::clone(&transport)).attach(&container)?),
		None => warn!("No post container {:?} on this page.", config.post_container_id),
	}

	listeners.extend(reply::attach(document, &config)?);

	if config.subscriptions {
		listeners.extend(SubscribeHandler::new(Rc::clone(&config), transport).attach(document)?);
	}

	info!("Installed {} listener(s).", listeners.len());
	Ok(Bindings { listeners })
}

/// Runs `f` right away if `document` has already finished loading, otherwise once `window` fires `load`.
///
/// Returns whether `f` already ran.
///
/// # Errors
///
/// Iff the `load` listener can't be added.
#[instrument(skip(window, document, f))]
pub fn when_loaded(window: &Window, document: &Document, f: impl 'static + FnOnce()) -> Result<bool, SetupError> {
	if document.ready_state() == "complete" {
		f();
		return Ok(true);
	}

	let on_load = Closure::once(f);
	window
		.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
		.map_err(|thrown| SetupError::Listen { event: "load", message: error::describe(&thrown) })?;
	on_load.forget();
	Ok(false)
}

/// Entry point for the compiled page script: installs the default wiring once the page has loaded.
///
/// The bindings stay alive for the rest of the page's lifetime.
#[cfg(feature = "start")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
	use tracing::error;

	// Another subscriber may already be installed by the embedding page's tooling.
	let _ = tracing_wasm::try_set_as_global_default();

	let window = match web_sys::window() {
		Some(window) => window,
		None => return error!("{}", SetupError::NoWindow),
	};
	let document = match window.document() {
		Some(document) => document,
		None => return error!("{}", SetupError::NoDocument),
	};

	let loaded_document = document.clone();
	let wire = move || match install(&loaded_document, Config::default(), Rc::new(api::FetchTransport)) {
		Ok(bindings) => core::mem::forget(bindings),
		Err(error) => error!("Could not wire up the page: {}", error),
	};
	if let Err(error) = when_loaded(&window, &document, wire) {
		error!("Could not wait for page load: {}", error);
	}
}
