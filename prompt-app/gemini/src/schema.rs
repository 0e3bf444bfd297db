//! Wire types for the `generateContent` REST method.

use common::CompletionError;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
	pub contents: Vec<Content>,
}

impl GenerateContentRequest {
	/// A single user turn carrying `prompt`.
	pub fn from_prompt(prompt: &str) -> Self {
		Self { contents: vec![Content { role: Some("user".to_owned()), parts: vec![Part { text: Some(prompt.to_owned()) }] }] }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	#[serde(default)]
	pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
	#[serde(default)]
	pub candidates: Vec<Candidate>,
	pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	pub content: Option<Content>,
	pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
	pub block_reason: Option<BlockReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
	FinishReasonUnspecified,
	Stop,
	MaxTokens,
	Safety,
	Recitation,
	Language,
	Other,
	Blocklist,
	ProhibitedContent,
	Spii,
	MalformedFunctionCall,
	#[serde(other)]
	Unknown,
}

impl FinishReason {
	/// Whether the candidate text was withheld rather than merely cut short.
	pub fn is_blocking(&self) -> bool {
		matches!(self, Self::Safety | Self::Recitation | Self::Language | Self::Blocklist | Self::ProhibitedContent | Self::Spii)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockReason {
	BlockReasonUnspecified,
	Safety,
	Other,
	Blocklist,
	ProhibitedContent,
	#[serde(other)]
	Unknown,
}

impl GenerateContentResponse {
	/// Concatenated text of the first candidate.
	///
	/// A blocked prompt or a candidate stopped for a blocking reason is an error. A response with
	/// no candidates and no block reason yields an empty string.
	pub fn text(&self) -> Result<String, CompletionError> {
		let Some(candidate) = self.candidates.first() else {
			if let Some(reason) = self.prompt_feedback.as_ref().and_then(|feedback| feedback.block_reason) {
				return Err(CompletionError::Blocked(reason.to_string()));
			}
			return Ok(String::new());
		};

		if let Some(reason) = candidate.finish_reason.filter(FinishReason::is_blocking) {
			return Err(CompletionError::Blocked(reason.to_string()));
		}

		Ok(candidate.content.iter().flat_map(|content| &content.parts).filter_map(|part| part.text.as_deref()).collect())
	}
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
	pub error: ServiceStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
	pub code: u16,
	pub message: String,
	pub status: Option<String>,
}

#[cfg(test)]
mod tests {
	use {super::*, serde_json::json};

	fn response(value: serde_json::Value) -> GenerateContentResponse {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn request_serializes_as_single_user_turn() {
		let body = serde_json::to_value(GenerateContentRequest::from_prompt("Explain how AI works")).unwrap();
		assert_eq!(body, json!({ "contents": [{ "role": "user", "parts": [{ "text": "Explain how AI works" }] }] }));
	}

	#[test]
	fn text_joins_parts_of_first_candidate() {
		let parsed = response(json!({
			"candidates": [
				{
					"content": { "role": "model", "parts": [{ "text": "AI is a field " }, { "text": "of..." }] },
					"finishReason": "STOP",
					"index": 0
				},
				{ "content": { "parts": [{ "text": "ignored" }] } }
			],
			"usageMetadata": { "promptTokenCount": 4 }
		}));
		assert_eq!(parsed.text().unwrap(), "AI is a field of...");
	}

	#[test]
	fn parts_without_text_are_skipped() {
		let parsed = response(json!({
			"candidates": [{ "content": { "parts": [{ "inlineData": {} }, { "text": "only this" }] }, "finishReason": "MAX_TOKENS" }]
		}));
		assert_eq!(parsed.text().unwrap(), "only this");
	}

	#[test]
	fn blocked_prompt_is_an_error() {
		let parsed = response(json!({ "promptFeedback": { "blockReason": "SAFETY", "safetyRatings": [] } }));
		match parsed.text() {
			Err(CompletionError::Blocked(reason)) => assert_eq!(reason, "SAFETY"),
			other => panic!("expected a blocked prompt, got {other:?}"),
		}
	}

	#[test]
	fn blocking_finish_reason_is_an_error() {
		let parsed = response(json!({
			"candidates": [{ "content": { "parts": [{ "text": "partial" }] }, "finishReason": "RECITATION" }]
		}));
		match parsed.text() {
			Err(CompletionError::Blocked(reason)) => assert_eq!(reason, "RECITATION"),
			other => panic!("expected a blocked candidate, got {other:?}"),
		}
	}

	#[test]
	fn unknown_finish_reason_is_tolerated() {
		let parsed = response(json!({
			"candidates": [{ "content": { "parts": [{ "text": "fine" }] }, "finishReason": "SOMETHING_NEW" }]
		}));
		assert_eq!(parsed.candidates[0].finish_reason, Some(FinishReason::Unknown));
		assert_eq!(parsed.text().unwrap(), "fine");
	}

	#[test]
	fn no_candidates_yields_empty_text() {
		assert_eq!(response(json!({})).text().unwrap(), "");
	}

	#[test]
	fn error_envelope_decodes() {
		let envelope: ErrorEnvelope = serde_json::from_value(json!({
			"error": { "code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT" }
		}))
		.unwrap();
		assert_eq!(envelope.error.code, 400);
		assert_eq!(envelope.error.status.as_deref(), Some("INVALID_ARGUMENT"));
	}
}
