use std::time::Duration;

use dioxus::logger::tracing::{debug, error};

use crate::{
	completion::{Sleep, TextCompletion},
	state::RequestState,
	store::RequestStore,
};

/// How long the submit control stays disabled after a request resolves.
pub const COOLDOWN: Duration = Duration::from_millis(3_000);

/// Drives one prompt submission from dispatch through cooldown.
///
/// Overlapping submissions are not rejected here. The form disables its submit control
/// while a request is in flight or cooling down; a direct caller gets whatever ordering
/// the completions happen to resolve in.
pub struct PromptController<C, T> {
	completion: C,
	timer: T,
	cooldown: Duration,
}

impl<C, T> PromptController<C, T>
where
	C: TextCompletion,
	T: Sleep,
{
	pub fn new(completion: C, timer: T) -> Self {
		Self { completion, timer, cooldown: COOLDOWN }
	}

	#[must_use]
	pub fn with_cooldown(self, cooldown: Duration) -> Self {
		Self { cooldown, ..self }
	}

	pub fn cooldown(&self) -> Duration {
		self.cooldown
	}

	/// Moves the store into Submitting and returns the prompt to send.
	///
	/// Runs synchronously so a second submit event in the same turn already sees the control disabled.
	pub fn dispatch(&self, store: &mut impl RequestStore) -> String {
		let prompt = store.update(RequestState::dispatch);
		debug!("Dispatching prompt ({} chars)", prompt.chars().count());
		prompt
	}

	/// Awaits the completion for an already dispatched `prompt`, resolves it and runs the cooldown.
	pub async fn complete(&self, prompt: String, mut store: impl RequestStore) {
		let outcome = self.completion.generate(&prompt).await;
		if let Err(err) = &outcome {
			error!("Error generating content: {err}");
		}

		let phase = store.update(|state| {
			state.resolve(outcome);
			state.phase()
		});
		debug!("Request resolved, entering {phase}");

		// Never cancelled: a stale timer firing after a newer dispatch only clears the flag early.
		self.timer.sleep(self.cooldown).await;
		store.update(RequestState::finish_cooldown);
	}

	/// [`dispatch`](Self::dispatch) now, then the rest of the lifecycle once the returned future is polled.
	pub fn submit<S: RequestStore>(&self, mut store: S) -> impl Future<Output = ()> {
		let prompt = self.dispatch(&mut store);
		self.complete(prompt, store)
	}
}
