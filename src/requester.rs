//! Asks the completion service for a standardized name for one file.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::completion::{ChatMessage, CompletionError, CompletionRequest, CompletionService};

pub const DEFAULT_OUTPUT_FORMAT: &str = "<Standardized US English Name>";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 60;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Reply the model is told to give when it cannot produce a name.
/// Matched by the default failure markers of the sanitizer.
pub const REFUSAL_REPLY: &str = "Sorry, I cannot rename this file.";

// A 19xx or 20xx year that is not part of a longer run of digits
static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\D)((?:19|20)\d{2})(?:\D|$)").unwrap());

/// Settings applied to every request of a run
#[derive(Debug, Clone)]
pub struct RequesterConfig {
    pub output_format: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for RequesterConfig {
    fn default() -> Self {
        Self {
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Builds prompts and delegates them to an injected completion service
pub struct FilenameRequester<S> {
    service: S,
    config: RequesterConfig,
}

impl<S: CompletionService> FilenameRequester<S> {
    pub fn new(service: S, config: RequesterConfig) -> Self {
        Self { service, config }
    }

    /// Ask for a new name for `old_name`.
    ///
    /// Failures are logged and reported as `None`; the caller decides whether
    /// to skip the file or fall back.
    pub fn propose_filename(&self, old_name: &str) -> Option<String> {
        match self.request(old_name) {
            Ok(suggestion) => {
                debug!(file = %old_name, suggestion = %suggestion, "Received suggestion");
                Some(suggestion)
            }
            Err(e) => {
                warn!("Failed to get a new name for {}: {}", old_name, e);
                None
            }
        }
    }

    fn request(&self, old_name: &str) -> Result<String, CompletionError> {
        let request = self.build_request(old_name);
        self.service.complete(&request)
    }

    pub fn build_request(&self, old_name: &str) -> CompletionRequest {
        let year = detect_year(old_name);
        if let Some(year) = year {
            debug!(file = %old_name, year, "Detected year");
        }

        let prompt = build_prompt(old_name, &self.config.output_format, year);

        CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

/// Find the first standalone year between 1900 and 2099 in a filename
pub fn detect_year(name: &str) -> Option<u16> {
    YEAR_REGEX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Build the user-role instruction for one file
pub fn build_prompt(old_name: &str, output_format: &str, year: Option<u16>) -> String {
    let year_rule = match year {
        Some(year) => format!(
            "The original filename contains the year {}; include it in the new name.",
            year
        ),
        None => "The original filename contains no year; do not add one.".to_string(),
    };

    format!(
        "Rename the following concert file to the format {format}: {old}\n\
         Rules:\n\
         - Only return the new filename (with its original extension) and nothing else.\n\
         - If the name contains a \"Live on <X>\" phrase, keep it intact.\n\
         - Replace any non-English characters with their closest English equivalents.\n\
         - {year_rule}\n\
         - If you cannot produce a suitable name, reply exactly \"{refusal}\" instead of guessing.",
        format = output_format,
        old = old_name,
        year_rule = year_rule,
        refusal = REFUSAL_REPLY,
    )
}
