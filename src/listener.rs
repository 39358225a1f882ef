use crate::error::{describe, SetupError};
use tracing::{error, trace};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget};

/// An event listener that stays attached for as long as this handle lives.
///
/// Dropping the handle removes the listener from its target and frees the underlying [`Closure`].
#[derive(Debug)]
#[must_use = "The listener is removed again when dropped."]
pub struct Listener {
	target: EventTarget,
	event: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
	/// # Errors
	///
	/// Iff the browser refuses to add the listener.
	pub fn new(target: EventTarget, event: &'static str, handler: impl 'static + FnMut(Event)) -> Result<Self, SetupError> {
		let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
		target
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
			.map_err(|error| SetupError::Listen { event, message: describe(&error) })?;
		trace!("Added {:?} listener.", event);
		Ok(Self { target, event, closure })
	}

	#[must_use]
	pub fn target(&self) -> &EventTarget {
		&self.target
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		if let Err(error) = self.target.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref()) {
			error!("Failed to remove {:?} listener: {}", self.event, describe(&error));
		} else {
			trace!("Removed {:?} listener.", self.event);
		}
	}
}
