//! Delegated up-/downvote handling with optimistic rating updates.
//!
//! The rating display is only rewritten after the API accepted the vote, by stepping the number it already shows.
//! Nothing is de-duplicated: two quick clicks send two requests and may step the display twice.

use crate::{
	api::{self, Endpoint, Transport, VoteBody},
	config::{Config, ID_ATTRIBUTE, POST_TYPE_ATTRIBUTE},
	error::{RequestError, SetupError},
	listener::Listener,
};
use std::rc::Rc;
use tracing::{error, field, instrument, trace, warn, Span};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Up,
	Down,
}

impl Direction {
	#[must_use]
	pub fn endpoint(self) -> Endpoint {
		match self {
			Direction::Up => Endpoint::Upvote,
			Direction::Down => Endpoint::Downvote,
		}
	}

	#[must_use]
	pub fn step(self) -> i64 {
		match self {
			Direction::Up => 1,
			Direction::Down => -1,
		}
	}

	/// The rating display sits right after an upvote control and right before a downvote control.
	#[must_use]
	pub fn rating_display(self, control: &Element) -> Option<Element> {
		match self {
			Direction::Up => control.next_element_sibling(),
			Direction::Down => control.previous_element_sibling(),
		}
	}

	fn class(self, config: &Config) -> &str {
		match self {
			Direction::Up => &config.upvote_class,
			Direction::Down => &config.downvote_class,
		}
	}
}

/// What a vote control points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTarget {
	pub id: String,
	pub post_type: String,
}

impl VoteTarget {
	/// Reads `data-id` and `data-posttype`. [`None`] if either is missing.
	#[must_use]
	pub fn from_element(control: &Element) -> Option<Self> {
		Some(Self {
			id: control.get_attribute(ID_ATTRIBUTE)?,
			post_type: control.get_attribute(POST_TYPE_ATTRIBUTE)?,
		})
	}
}

/// Reads a displayed rating the way the page always has: surrounding whitespace is ignored and an empty display counts as `0`.
#[must_use]
pub fn parse_rating(text: &str) -> Option<i64> {
	let text = text.trim();
	if text.is_empty() {
		Some(0)
	} else {
		text.parse().ok()
	}
}

/// Handles clicks anywhere inside a post container. Cheap to clone.
#[derive(Clone)]
pub struct VoteHandler {
	config: Rc<Config>,
	transport: Rc<dyn Transport>,
}

impl core::fmt::Debug for VoteHandler {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("VoteHandler").field("config", &self.config).finish_non_exhaustive()
	}
}

impl VoteHandler {
	#[must_use]
	pub fn new(config: Rc<Config>, transport: Rc<dyn Transport>) -> Self {
		Self { config, transport }
	}

	/// Adds one delegated `click` listener to `container`.
	///
	/// # Errors
	///
	/// Iff the listener can't be added.
	#[instrument(skip(self))]
	pub fn attach(&self, container: &Element) -> Result<Listener, SetupError> {
		let handler = self.clone();
		let target = container.clone();
		let container = container.clone();
		Listener::new(target.into(), "click", move |event| handler.handle_click(&container, &event))
	}

	/// Starts a vote for each vote control inside `container` the click landed in, without waiting for it.
	pub fn handle_click(&self, container: &Element, event: &Event) {
		let clicked = match event.target().and_then(|target| target.dyn_into::<Element>().ok()) {
			Some(clicked) => clicked,
			None => return trace!("Click without element target."),
		};

		for &direction in &[Direction::Up, Direction::Down] {
			let selector = Config::selector(direction.class(&self.config));
			let control = match clicked.closest(&selector) {
				Ok(Some(control)) if container.contains(Some(control.as_ref())) => control,
				Ok(_) => continue,
				Err(_) => {
					warn!("Invalid vote selector {:?}.", selector);
					continue;
				}
			};

			let handler = self.clone();
			spawn_local(async move {
				// Already logged.
				let _ = handler.vote(&control, direction).await;
			});
		}
	}

	/// Sends the vote for `control` and, once accepted, steps its rating display.
	///
	/// Returns the newly displayed rating, or [`None`] if the markup around `control` didn't allow an update.
	///
	/// # Errors
	///
	/// Iff the request failed. The display is left unchanged and the failure is logged here.
	#[instrument(skip(self, control), fields(id = field::Empty, post_type = field::Empty))]
	pub async fn vote(&self, control: &Element, direction: Direction) -> Result<Option<i64>, RequestError> {
		let target = match VoteTarget::from_element(control) {
			Some(target) => target,
			None => {
				warn!("Vote control is missing {:?} or {:?}.", ID_ATTRIBUTE, POST_TYPE_ATTRIBUTE);
				return Ok(None);
			}
		};
		if cfg!(feature = "dangerous-logging") {
			let span = Span::current();
			span.record("id", target.id.as_str());
			span.record("post_type", target.post_type.as_str());
		}

		let display = direction.rating_display(control);
		let body = VoteBody {
			id: &target.id,
			post_type: &target.post_type,
		};
		if let Err(request_error) = api::send(&*self.transport, &self.config.base_url, direction.endpoint(), &body).await {
			error!("Error: {}", request_error);
			return Err(request_error);
		}

		let display = match display {
			Some(display) => display,
			None => {
				warn!("Vote control has no rating display next to it.");
				return Ok(None);
			}
		};
		let text = display.text_content().unwrap_or_default();
		let rating = match parse_rating(&text) {
			Some(rating) => rating.saturating_add(direction.step()),
			None => {
				warn!("Rating display doesn't show an integer; leaving it as is.");
				return Ok(None);
			}
		};
		display.set_text_content(Some(&rating.to_string()));
		trace!("Rating now displayed as {}.", rating);
		Ok(Some(rating))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ratings_parse_like_the_page() {
		assert_eq!(parse_rating("5"), Some(5));
		assert_eq!(parse_rating("  -3\n"), Some(-3));
		assert_eq!(parse_rating("+2"), Some(2));
		assert_eq!(parse_rating(""), Some(0));
		assert_eq!(parse_rating("   "), Some(0));
		assert_eq!(parse_rating("five"), None);
		assert_eq!(parse_rating("1.5"), None);
	}

	#[test]
	fn directions_map_to_endpoints() {
		assert_eq!(Direction::Up.endpoint(), Endpoint::Upvote);
		assert_eq!(Direction::Down.endpoint(), Endpoint::Downvote);
		assert_eq!(Direction::Up.step() + Direction::Down.step(), 0);
	}
}
