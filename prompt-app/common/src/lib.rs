mod completion;
mod controller;
mod error;
mod state;
mod store;

pub use completion::{Sleep, TextCompletion};
pub use controller::{COOLDOWN, PromptController};
pub use error::{CompletionError, GenerationFailed};
pub use state::{DEFAULT_PROMPT, Phase, RequestState};
pub use store::RequestStore;
