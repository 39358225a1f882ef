//! Reply buttons show and hide the reply form that directly follows them.

use crate::{config::Config, error::SetupError, listener::Listener};
use tracing::{info, instrument, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	Shown,
	Hidden,
}

/// Flips `form`'s inline `display` between `block` and `none`.
///
/// A form without an inline `display` value counts as hidden, so the first click shows it.
#[instrument]
pub fn toggle(form: &HtmlElement) -> Visibility {
	let style = form.style();
	let current = style.get_property_value("display").unwrap_or_default();
	let (next, visibility) = match current.as_str() {
		"none" | "" => ("block", Visibility::Shown),
		_ => ("none", Visibility::Hidden),
	};
	if let Err(error) = style.set_property("display", next) {
		warn!("Could not set reply form display to {:?}: {:?}", next, error);
	}
	visibility
}

/// The form a reply button controls.
#[must_use]
pub fn reply_form(button: &Element) -> Option<HtmlElement> {
	button.next_element_sibling()?.dyn_into().ok()
}

/// Adds a `click` listener to each reply button currently in `document`.
///
/// # Errors
///
/// Iff a listener can't be added.
#[instrument(skip(document))]
pub fn attach(document: &Document, config: &Config) -> Result<Vec<Listener>, SetupError> {
	let buttons = document.get_elements_by_class_name(&config.reply_button_class);
	let mut listeners = Vec::with_capacity(buttons.length() as usize);
	for button in (0..buttons.length()).filter_map(|i| buttons.item(i)) {
		let target = button.clone();
		listeners.push(Listener::new(target.into(), "click", move |_| match reply_form(&button) {
			Some(form) => {
				toggle(&form);
			}
			None => warn!("Reply button has no reply form after it."),
		})?);
	}
	info!("Attached {} reply toggle(s).", listeners.len());
	Ok(listeners)
}
