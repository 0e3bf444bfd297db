//! Minimal client for Google's Gemini `generateContent` endpoint.
//!
//! Only what the prompt form needs: one user turn in, the first candidate's text out.

pub mod schema;

use std::sync::LazyLock;

use bon::Builder;
use common::{CompletionError, TextCompletion};
use futures::{FutureExt, future::LocalBoxFuture};
use reqwest::{
	StatusCode,
	header::{HeaderValue, InvalidHeaderValue},
};
use schema::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-pro";

const API_KEY_HEADER: &str = "x-goog-api-key";

static DEFAULT_BASE_URL: LazyLock<Url> =
	LazyLock::new(|| Url::parse("https://generativelanguage.googleapis.com/v1beta/").expect("default Gemini base URL is valid"));

#[derive(Debug, Clone, Builder)]
pub struct GeminiConfig {
	/// Sent as `x-goog-api-key`. An empty key fails every request before it leaves the browser.
	#[builder(into)]
	pub api_key: String,
	#[builder(into, default = DEFAULT_MODEL.to_owned())]
	pub model: String,
	/// Must end with a slash; the model path is joined onto it.
	#[builder(default = DEFAULT_BASE_URL.clone())]
	pub base_url: Url,
}

#[derive(Debug, Error)]
pub enum GeminiError {
	#[error("invalid endpoint: {0}")]
	Endpoint(#[from] url::ParseError),

	#[error("API key is not a valid header value")]
	ApiKey(#[from] InvalidHeaderValue),

	#[error(transparent)]
	Http(#[from] reqwest::Error),
}

impl From<GeminiError> for CompletionError {
	fn from(err: GeminiError) -> Self {
		match err {
			GeminiError::Http(_) => Self::transport(err),
			GeminiError::Endpoint(_) | GeminiError::ApiKey(_) => Self::invalid_request(err),
		}
	}
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
	http: reqwest::Client,
	config: GeminiConfig,
}

impl GeminiClient {
	pub fn new(config: GeminiConfig) -> Self {
		Self { http: reqwest::Client::new(), config }
	}

	pub fn config(&self) -> &GeminiConfig {
		&self.config
	}

	/// `{base_url}models/{model}:generateContent`. Accepts the model with or without its `models/` prefix.
	pub fn endpoint(&self) -> Result<Url, GeminiError> {
		let model = self.config.model.trim_start_matches("models/");
		Ok(self.config.base_url.join(&format!("models/{model}:generateContent"))?)
	}

	pub async fn generate_content(&self, prompt: &str) -> Result<String, CompletionError> {
		if self.config.api_key.is_empty() {
			return Err(CompletionError::MissingApiKey);
		}

		let endpoint = self.endpoint()?;
		let mut api_key = HeaderValue::from_str(&self.config.api_key).map_err(GeminiError::from)?;
		api_key.set_sensitive(true);

		debug!("Requesting completion from {endpoint}");
		let response = self
			.http
			.post(endpoint)
			.header(API_KEY_HEADER, api_key)
			.json(&GenerateContentRequest::from_prompt(prompt))
			.send()
			.await
			.map_err(GeminiError::from)?;

		let status = response.status();
		let body = response.text().await.map_err(GeminiError::from)?;
		if !status.is_success() {
			return Err(service_error(status, &body));
		}

		let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
		parsed.text()
	}
}

impl TextCompletion for GeminiClient {
	fn generate<'a>(&'a self, prompt: &'a str) -> LocalBoxFuture<'a, Result<String, CompletionError>> {
		self.generate_content(prompt).boxed_local()
	}
}

fn service_error(status: StatusCode, body: &str) -> CompletionError {
	let message = serde_json::from_str::<ErrorEnvelope>(body)
		.map_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_owned(), |envelope| envelope.error.message);
	CompletionError::Service { status: status.as_u16(), message }
}
