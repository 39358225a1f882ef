#![cfg(target_arch = "wasm32")]

use seenit_dom::{
	config::Config,
	reply::{self, Visibility},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

use web_support_::{click, document, find, fixture, init_logging};

fn display(root: &web_sys::Element, selector: &str) -> String {
	find(root, selector).dyn_into::<HtmlElement>().unwrap().style().get_property_value("display").unwrap()
}

fn config(class: &str) -> Config {
	Config {
		reply_button_class: class.to_owned(),
		..Config::default()
	}
}

#[wasm_bindgen_test]
fn click_alternates_visibility() {
	init_logging();
	let root = fixture(r#"<button class="reply-alternates">Reply</button><form class="form" style="display: none"></form>"#);
	let _listeners = reply::attach(&document(), &config("reply-alternates")).unwrap();

	click(&root, ".reply-alternates");
	assert_eq!(display(&root, ".form"), "block");

	click(&root, ".reply-alternates");
	assert_eq!(display(&root, ".form"), "none");

	click(&root, ".reply-alternates");
	assert_eq!(display(&root, ".form"), "block");
	root.remove();
}

#[wasm_bindgen_test]
fn unset_display_is_shown_first() {
	init_logging();
	let root = fixture(r#"<form class="form"></form>"#);
	let form = find(&root, ".form").dyn_into::<HtmlElement>().unwrap();

	assert_eq!(reply::toggle(&form), Visibility::Shown);
	assert_eq!(display(&root, ".form"), "block");
	assert_eq!(reply::toggle(&form), Visibility::Hidden);
	assert_eq!(display(&root, ".form"), "none");
	root.remove();
}

#[wasm_bindgen_test]
fn each_button_controls_its_own_form() {
	init_logging();
	let root = fixture(
		r#"
		<button class="reply-pair first">Reply</button><form class="first-form" style="display: none"></form>
		<button class="reply-pair second">Reply</button><form class="second-form" style="display: none"></form>
		"#,
	);
	let listeners = reply::attach(&document(), &config("reply-pair")).unwrap();
	assert_eq!(listeners.len(), 2);

	click(&root, ".second");
	assert_eq!(display(&root, ".first-form"), "none");
	assert_eq!(display(&root, ".second-form"), "block");
	root.remove();
}

#[wasm_bindgen_test]
fn button_without_form_is_harmless() {
	init_logging();
	let root = fixture(r#"<button class="reply-lonely">Reply</button>"#);
	let _listeners = reply::attach(&document(), &config("reply-lonely")).unwrap();

	click(&root, ".reply-lonely");
	assert!(reply::reply_form(&find(&root, ".reply-lonely")).is_none());
	root.remove();
}
