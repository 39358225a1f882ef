//! Subscribe/unsubscribe buttons on channel pages.
//!
//! Each subscription container holds one button of each kind and carries `data-channel-id` and `data-user-id`.
//! Only the button that applies is visible; a successful request swaps them.

use crate::{
	api::{self, Endpoint, SubscriptionBody, Transport},
	config::{Config, CHANNEL_ID_ATTRIBUTE, USER_ID_ATTRIBUTE},
	error::{RequestError, SetupError},
	listener::Listener,
};
use std::rc::Rc;
use tracing::{error, field, info, instrument, warn, Span};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Subscribe,
	Unsubscribe,
}

impl Action {
	#[must_use]
	pub fn endpoint(self) -> Endpoint {
		match self {
			Action::Subscribe => Endpoint::Subscribe,
			Action::Unsubscribe => Endpoint::Unsubscribe,
		}
	}

	fn class(self, config: &Config) -> &str {
		match self {
			Action::Subscribe => &config.subscribe_class,
			Action::Unsubscribe => &config.unsubscribe_class,
		}
	}

	fn counterpart(self) -> Self {
		match self {
			Action::Subscribe => Action::Unsubscribe,
			Action::Unsubscribe => Action::Subscribe,
		}
	}
}

#[derive(Clone)]
pub struct SubscribeHandler {
	config: Rc<Config>,
	transport: Rc<dyn Transport>,
}

impl core::fmt::Debug for SubscribeHandler {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("SubscribeHandler").field("config", &self.config).finish_non_exhaustive()
	}
}

impl SubscribeHandler {
	#[must_use]
	pub fn new(config: Rc<Config>, transport: Rc<dyn Transport>) -> Self {
		Self { config, transport }
	}

	/// Adds a delegated `click` listener to each subscription container currently in `document`.
	///
	/// # Errors
	///
	/// Iff a listener can't be added.
	#[instrument(skip(self, document))]
	pub fn attach(&self, document: &Document) -> Result<Vec<Listener>, SetupError> {
		let containers = document.get_elements_by_class_name(&self.config.subscription_container_class);
		let mut listeners = Vec::with_capacity(containers.length() as usize);
		for container in (0..containers.length()).filter_map(|i| containers.item(i)) {
			let handler = self.clone();
			let target = container.clone();
			listeners.push(Listener::new(target.into(), "click", move |event| handler.handle_click(&container, &event))?);
		}
		info!("Attached {} subscription container(s).", listeners.len());
		Ok(listeners)
	}

	pub fn handle_click(&self, container: &Element, event: &Event) {
		let clicked = match event.target().and_then(|target| target.dyn_into::<Element>().ok()) {
			Some(clicked) => clicked,
			None => return,
		};

		for &action in &[Action::Subscribe, Action::Unsubscribe] {
			let button = match clicked.closest(&Config::selector(action.class(&self.config))) {
				Ok(Some(button)) if container.contains(Some(button.as_ref())) => button,
				Ok(_) => continue,
				Err(_) => {
					warn!("Invalid subscription selector for {:?}.", action);
					continue;
				}
			};

			let handler = self.clone();
			let container = container.clone();
			spawn_local(async move {
				// Already logged.
				let _ = handler.apply(&container, &button, action).await;
			});
		}
	}

	/// Sends `action` for `container`'s channel and user, then hides `button` and reveals its counterpart.
	///
	/// Returns whether the buttons were swapped.
	///
	/// # Errors
	///
	/// Iff the request failed. Both buttons keep their classes and the failure is logged here.
	#[instrument(skip(self, container, button), fields(channel_id = field::Empty, user_id = field::Empty))]
	pub async fn apply(&self, container: &Element, button: &Element, action: Action) -> Result<bool, RequestError> {
		let (channel_id, user_id) = match (container.get_attribute(CHANNEL_ID_ATTRIBUTE), container.get_attribute(USER_ID_ATTRIBUTE)) {
			(Some(channel_id), Some(user_id)) => (channel_id, user_id),
			_ => {
				warn!("Subscription container is missing {:?} or {:?}.", CHANNEL_ID_ATTRIBUTE, USER_ID_ATTRIBUTE);
				return Ok(false);
			}
		};
		if cfg!(feature = "dangerous-logging") {
			let span = Span::current();
			span.record("channel_id", channel_id.as_str());
			span.record("user_id", user_id.as_str());
		}

		let body = SubscriptionBody {
			channel_id: &channel_id,
			user_id: &user_id,
		};
		if let Err(request_error) = api::send(&*self.transport, &self.config.base_url, action.endpoint(), &body).await {
			error!("Error: {}", request_error);
			return Err(request_error);
		}

		let hidden = &self.config.hidden_class;
		if let Err(error) = button.class_list().add_1(hidden) {
			warn!("Could not hide {:?} button: {:?}", action, error);
		}
		match container.query_selector(&Config::selector(action.counterpart().class(&self.config))) {
			Ok(Some(counterpart)) => {
				if let Err(error) = counterpart.class_list().remove_1(hidden) {
					warn!("Could not reveal {:?} button: {:?}", action.counterpart(), error);
				}
			}
			Ok(None) => warn!("Subscription container has no {:?} button.", action.counterpart()),
			Err(error) => warn!("Invalid subscription selector: {:?}", error),
		}
		Ok(true)
	}
}
