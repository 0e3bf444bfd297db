use std::error::Error as StdError;

use thiserror::Error;

/// The only failure a user ever sees. Every [`CompletionError`] collapses into this.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Failed to get response from AI")]
pub struct GenerationFailed;

/// Why a completion request failed. Logged for diagnostics, never rendered.
#[derive(Debug, Error)]
pub enum CompletionError {
	#[error("no API key was configured")]
	MissingApiKey,

	#[error("could not build request: {0}")]
	InvalidRequest(#[source] Box<dyn StdError + Send + Sync + 'static>),

	#[error("communication failed: {0}")]
	Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),

	#[error("service responded with {status}: {message}")]
	Service { status: u16, message: String },

	#[error("malformed response: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("generation was blocked: {0}")]
	Blocked(String),
}

impl CompletionError {
	pub fn invalid_request(source: impl StdError + Send + Sync + 'static) -> Self {
		Self::InvalidRequest(Box::new(source))
	}

	pub fn transport(source: impl StdError + Send + Sync + 'static) -> Self {
		Self::Transport(Box::new(source))
	}
}
