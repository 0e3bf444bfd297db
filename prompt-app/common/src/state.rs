use strum::{Display, IntoStaticStr};

use crate::error::{CompletionError, GenerationFailed};

/// Sent in place of an empty input.
pub const DEFAULT_PROMPT: &str = "Explain how AI works";

/// Where the form is in its request lifecycle, derived from the flags on [`RequestState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
	Idle,
	Submitting,
	Cooldown,
}

impl Phase {
	pub fn submit_label(self) -> &'static str {
		match self {
			Self::Idle => "Submit",
			Self::Submitting => "Processing...",
			Self::Cooldown => "✓ Submitted",
		}
	}
}

/// Everything the form renders. Lives as long as the page session and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
	pub input_text: String,
	pub is_focused: bool,
	pub is_submitted: bool,
	pub is_loading: bool,
	pub response_text: String,
	pub error_text: String,
}

impl RequestState {
	pub fn set_input(&mut self, text: impl Into<String>) {
		self.input_text = text.into();
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.is_focused = focused;
	}

	/// The prompt that would be sent right now.
	pub fn prompt(&self) -> String {
		if self.input_text.is_empty() { DEFAULT_PROMPT.to_owned() } else { self.input_text.clone() }
	}

	pub fn phase(&self) -> Phase {
		if self.is_loading {
			Phase::Submitting
		} else if self.is_submitted {
			Phase::Cooldown
		} else {
			Phase::Idle
		}
	}

	pub fn can_submit(&self) -> bool {
		!(self.is_loading || self.is_submitted)
	}

	pub fn submit_label(&self) -> &'static str {
		self.phase().submit_label()
	}

	/// Enters `Submitting` and returns the prompt to send.
	///
	/// The previous response stays visible until the new outcome replaces it; only the error is cleared.
	pub fn dispatch(&mut self) -> String {
		self.is_submitted = true;
		self.is_loading = true;
		self.error_text.clear();
		self.prompt()
	}

	/// Enters `Cooldown` with the outcome of the completion call.
	///
	/// A failure never touches `response_text` and never exposes the underlying error.
	pub fn resolve(&mut self, outcome: Result<String, CompletionError>) {
		match outcome {
			Ok(text) => self.response_text = text,
			Err(_) => self.error_text = GenerationFailed.to_string(),
		}
		self.is_loading = false;
	}

	/// Leaves `Cooldown`. Safe to call when already idle.
	pub fn finish_cooldown(&mut self) {
		self.is_submitted = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn answered(text: &str) -> RequestState {
		RequestState { response_text: text.to_owned(), ..RequestState::default() }
	}

	#[test]
	fn empty_input_falls_back_to_default_prompt() {
		let mut state = RequestState::default();
		assert_eq!(state.dispatch(), DEFAULT_PROMPT);
	}

	#[test]
	fn dispatch_sends_user_text_verbatim() {
		let mut state = RequestState::default();
		state.set_input("What is 2+2?");
		assert_eq!(state.dispatch(), "What is 2+2?");
	}

	#[test]
	fn whitespace_is_not_treated_as_empty() {
		let mut state = RequestState::default();
		state.set_input("  ");
		assert_eq!(state.dispatch(), "  ");
	}

	#[test]
	fn dispatch_clears_error_but_keeps_previous_response() {
		let mut state = RequestState { error_text: GenerationFailed.to_string(), ..answered("old answer") };
		state.dispatch();

		assert!(state.is_loading);
		assert!(state.is_submitted);
		assert_eq!(state.error_text, "");
		assert_eq!(state.response_text, "old answer");
		assert_eq!(state.phase(), Phase::Submitting);
		assert!(!state.can_submit());
	}

	#[test]
	fn success_replaces_response() {
		let mut state = answered("old answer");
		state.dispatch();
		state.resolve(Ok("AI is a field of...".to_owned()));

		assert_eq!(state.response_text, "AI is a field of...");
		assert_eq!(state.error_text, "");
		assert!(!state.is_loading);
		assert_eq!(state.phase(), Phase::Cooldown);
	}

	#[test]
	fn failure_masks_error_and_keeps_response() {
		let mut state = answered("old answer");
		state.dispatch();
		state.resolve(Err(CompletionError::Service { status: 500, message: "backend exploded".to_owned() }));

		assert_eq!(state.error_text, "Failed to get response from AI");
		assert_eq!(state.response_text, "old answer");
		assert!(!state.is_loading);
		assert!(state.is_submitted);
	}

	#[test]
	fn finish_cooldown_only_clears_submitted() {
		let mut state = answered("text");
		state.dispatch();
		state.resolve(Ok("done".to_owned()));
		let before = state.clone();

		state.finish_cooldown();
		assert_eq!(state, RequestState { is_submitted: false, ..before });
		assert_eq!(state.phase(), Phase::Idle);
		assert!(state.can_submit());

		state.finish_cooldown();
		assert!(!state.is_submitted);
	}

	#[test]
	fn labels_follow_phase() {
		let mut state = RequestState::default();
		assert_eq!(state.submit_label(), "Submit");
		state.dispatch();
		assert_eq!(state.submit_label(), "Processing...");
		state.resolve(Ok(String::new()));
		assert_eq!(state.submit_label(), "✓ Submitted");
	}

	#[test]
	fn phase_names_are_kebab_case() {
		assert_eq!(Phase::Submitting.to_string(), "submitting");
		let name: &'static str = Phase::Cooldown.into();
		assert_eq!(name, "cooldown");
	}
}
