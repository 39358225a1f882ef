//! The markup contract shared with the server-rendered pages, plus the API location.

/// Where the forum API is served from. Not configurable at runtime.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Identifies the post/comment a vote control belongs to.
pub const ID_ATTRIBUTE: &str = "data-id";
/// Distinguishes posts from comments on a vote control.
pub const POST_TYPE_ATTRIBUTE: &str = "data-posttype";
pub const CHANNEL_ID_ATTRIBUTE: &str = "data-channel-id";
pub const USER_ID_ATTRIBUTE: &str = "data-user-id";

/// Everything the handlers need to know about the page, passed into them explicitly.
///
/// Class names are given without the leading `.`; use [`Config::selector`] to build a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub base_url: String,
	/// `id` of the element that receives the delegated vote listener.
	pub post_container_id: String,
	pub upvote_class: String,
	pub downvote_class: String,
	/// Each button with this class toggles its next element sibling.
	pub reply_button_class: String,
	pub subscription_container_class: String,
	pub subscribe_class: String,
	pub unsubscribe_class: String,
	/// Applied to whichever subscription button currently doesn't apply.
	pub hidden_class: String,
	/// Whether subscription buttons are wired at all. Off by default.
	pub subscriptions: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_owned(),
			post_container_id: "post-container".to_owned(),
			upvote_class: "upvote".to_owned(),
			downvote_class: "downvote".to_owned(),
			reply_button_class: "reply-button".to_owned(),
			subscription_container_class: "subscription".to_owned(),
			subscribe_class: "subscribe".to_owned(),
			unsubscribe_class: "unsubscribe".to_owned(),
			hidden_class: "hidden".to_owned(),
			subscriptions: false,
		}
	}
}

impl Config {
	#[must_use]
	pub fn selector(class: &str) -> String {
		format!(".{}", class)
	}
}
