mod client;
mod types;

pub use client::OpenAiClient;
pub use types::{
    ChatMessage, CompletionConfig, CompletionError, CompletionRequest, DEFAULT_BASE_URL,
};

use std::env;

/// Environment variable names for completion service configuration
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "OPENAI_MODEL";

/// A text-completion backend that answers one request at a time.
///
/// Implemented by [`OpenAiClient`] for real traffic and by canned stubs in
/// tests.
pub trait CompletionService {
    /// Send a request and return the text of the first returned choice.
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

impl<T: CompletionService + ?Sized> CompletionService for &T {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}

impl<T: CompletionService + ?Sized> CompletionService for Box<T> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}

/// Load completion service configuration from environment variables
///
/// - `OPENAI_API_KEY`: API credential (required for a usable client)
/// - `OPENAI_BASE_URL`: Endpoint root, defaults to the public OpenAI API
///
/// These can be set in a `.env` file in the working directory.
pub fn config_from_env(timeout_secs: u64) -> CompletionConfig {
    let api_key = env::var(ENV_API_KEY).unwrap_or_default();
    let base_url = env::var(ENV_BASE_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    CompletionConfig {
        api_key,
        base_url,
        timeout_secs,
    }
}

/// Model name override from `OPENAI_MODEL`, if set
pub fn model_from_env() -> Option<String> {
    env::var(ENV_MODEL).ok().filter(|v| !v.trim().is_empty())
}
