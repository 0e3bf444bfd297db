mod form;

use {
	common::{PromptController, RequestState, Sleep, TextCompletion},
	dioxus::{logger::tracing::warn, prelude::*},
	futures::{FutureExt, future::LocalBoxFuture},
	gemini::{GeminiClient, GeminiConfig},
	gloo_timers::future::TimeoutFuture,
	std::{rc::Rc, time::Duration},
	wasm_bindgen::prelude::*,
};

pub use form::{PromptForm, submit_if_ready};

/// Baked in by `build.rs`; empty when the variable was unset.
const GEMINI_API_KEY: &str = env!("GEMINI_API_KEY");

const STYLESHEET: Asset = asset!("/assets/main.css");

pub type GeminiController = PromptController<GeminiClient, BrowserTimer>;

/// Cooldown timer backed by `setTimeout`.
pub struct BrowserTimer;

impl Sleep for BrowserTimer {
	fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
		let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
		TimeoutFuture::new(millis).boxed_local()
	}
}

pub fn gemini_controller() -> GeminiController {
	if GEMINI_API_KEY.is_empty() {
		warn!("GEMINI_API_KEY was not set at build time, every request will fail");
	}
	let client = GeminiClient::new(GeminiConfig::builder().api_key(GEMINI_API_KEY).build());
	PromptController::new(client, BrowserTimer)
}

/// Dispatches into `state` before returning, then leaves the request and cooldown to a spawned task.
pub fn start_submission<C, T>(controller: &Rc<PromptController<C, T>>, mut state: Signal<RequestState>)
where
	C: TextCompletion + 'static,
	T: Sleep + 'static,
{
	let prompt = controller.dispatch(&mut state);
	let controller = controller.clone();
	spawn(async move {
		controller.complete(prompt, state).await;
	});
}

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("dioxus logger");
	dioxus::launch(App);
}

#[component]
pub fn App() -> Element {
	let state = use_signal(RequestState::default);
	let controller = use_hook(|| Rc::new(gemini_controller()));

	let on_submit = move |()| start_submission(&controller, state);

	rsx! {
		document::Stylesheet { href: STYLESHEET }
		PromptForm { state, on_submit }
	}
}
