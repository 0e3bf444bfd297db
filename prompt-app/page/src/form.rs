use {common::RequestState, dioxus::prelude::*};

/// Renders `state` and forwards edits, focus changes and submissions back into it.
///
/// Submission is only forwarded while the state allows it, so pressing Enter in the field
/// behaves like the disabled button.
#[component]
pub fn PromptForm(mut state: Signal<RequestState>, on_submit: EventHandler<()>) -> Element {
	let current = state();
	let phase = current.phase();

	rsx! {
		div { class: "page",
			div { class: "glow" }
			div { class: "card",
				form {
					class: "prompt-form",
					"data-phase": "{phase}",
					onsubmit: move |evt: FormEvent| {
						evt.prevent_default();
						submit_if_ready(state, on_submit);
					},
					h1 { class: "title", "Ask Gemini AI" }
					div { class: "field",
						input {
							class: "prompt-input",
							class: if current.is_focused { "focused" },
							r#type: "text",
							value: current.input_text.clone(),
							placeholder: "Type your question here...",
							oninput: move |evt| state.write().set_input(evt.value()),
							onfocus: move |_| state.write().set_focused(true),
							onblur: move |_| state.write().set_focused(false),
						}
						div { class: "underline", class: if current.is_focused { "focused" } }
					}
					button {
						class: "submit",
						class: if current.is_loading { "loading" },
						r#type: "submit",
						disabled: !current.can_submit(),
						span { class: "label", {phase.submit_label()} }
						if !current.is_loading {
							span { class: "shine" }
						}
					}
					if !current.error_text.is_empty() {
						div { class: "error", {current.error_text.clone()} }
					}
					if !current.response_text.is_empty() {
						div { class: "response", {current.response_text.clone()} }
					}
				}
			}
		}
	}
}

/// Calls `on_submit` unless a request is in flight or cooling down. Returns whether it did.
pub fn submit_if_ready(state: Signal<RequestState>, on_submit: EventHandler<()>) -> bool {
	let ready = state.peek().can_submit();
	if ready {
		on_submit.call(());
	}
	ready
}
