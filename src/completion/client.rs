use super::types::{
    CompletionConfig, CompletionError, CompletionRequest, CompletionResponse, ErrorEnvelope,
};
use super::CompletionService;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, trace};

/// Blocking client for an OpenAI-compatible chat-completions endpoint
pub struct OpenAiClient {
    client: Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    /// Create a new client with the given configuration
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        if !config.is_configured() {
            return Err(CompletionError::NotConfigured);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| CompletionError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl CompletionService for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let url = self.endpoint();
        let body = serde_json::to_string(request)
            .map_err(|e| CompletionError::EncodeError(e.to_string()))?;

        debug!(url = %url, model = %request.model, "Requesting completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        let status = response.status();

        debug!("Response status: {}", status);

        let text = response.text()?;
        trace!(body = %text, "Response body");

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), &text));
        }

        parse_completion(&text)
    }
}

/// Extract the first choice's text from a chat-completion response body
pub(crate) fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let response: CompletionResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::ParseError(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::EmptyResponse)
}

fn parse_error_body(status: u16, body: &str) -> CompletionError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.trim().to_string(),
    };

    CompletionError::Status { status, message }
}
