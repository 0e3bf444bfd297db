use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::error::CompletionError;

/// A text completion service: prompt in, completion text out.
///
/// Futures are local because the form runs on the browser's single thread.
pub trait TextCompletion {
	fn generate<'a>(&'a self, prompt: &'a str) -> LocalBoxFuture<'a, Result<String, CompletionError>>;
}

/// Delays the end of the cooldown window.
pub trait Sleep {
	fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
