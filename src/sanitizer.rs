//! Post-processing of raw model suggestions into usable filenames.

use thiserror::Error;
use tracing::trace;

use crate::title_case::title_case;

/// Phrases that show up when the model declines instead of answering
pub const DEFAULT_FAILURE_MARKERS: &[&str] = &[
    "sorry",
    "i'm unable",
    "i am unable",
    "i cannot",
    "i can't",
    "unable to",
];

/// Characters a proposed name must not contain.
/// '?' marks a character the model could not resolve.
pub const DEFAULT_DISALLOWED_CHARS: &[char] = &['?', '/', '\\', '\0'];

/// Why a suggestion was not accepted as a filename
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("suggestion is empty")]
    Empty,

    #[error("suggestion contains failure marker \"{0}\"")]
    FailureMarker(String),

    #[error("suggestion contains disallowed character {0:?}")]
    DisallowedCharacter(char),
}

#[derive(Debug, Clone)]
pub struct ResponseSanitizer {
    failure_markers: Vec<String>,
    disallowed_chars: Vec<char>,
}

impl Default for ResponseSanitizer {
    fn default() -> Self {
        Self {
            failure_markers: DEFAULT_FAILURE_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            disallowed_chars: DEFAULT_DISALLOWED_CHARS.to_vec(),
        }
    }
}

impl ResponseSanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the failure markers. Matching is case-insensitive.
    pub fn with_failure_markers<I, T>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.failure_markers = markers
            .into_iter()
            .map(|m| m.into().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        self
    }

    /// Add markers on top of the current ones.
    pub fn add_failure_markers<I, T>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.failure_markers.extend(
            markers
                .into_iter()
                .map(|m| m.into().to_lowercase())
                .filter(|m| !m.is_empty()),
        );
        self
    }

    pub fn with_disallowed_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.disallowed_chars = chars.into_iter().collect();
        self
    }

    pub fn failure_markers(&self) -> &[String] {
        &self.failure_markers
    }

    /// Turn a raw suggestion into a filename, or explain why it is unusable.
    ///
    /// Only the part before the last '.' is title-cased; the extension is
    /// kept byte-for-byte.
    pub fn sanitize(&self, raw: &str) -> Result<String, Rejection> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(Rejection::Empty);
        }

        let lower = text.to_lowercase();
        if let Some(marker) = self.failure_markers.iter().find(|m| lower.contains(m.as_str())) {
            return Err(Rejection::FailureMarker(marker.clone()));
        }

        let cased = match text.rsplit_once('.') {
            Some((name, extension)) => {
                let name = title_case(name).map_err(|_| Rejection::Empty)?;
                format!("{}.{}", name, extension)
            }
            None => title_case(text).map_err(|_| Rejection::Empty)?,
        };

        let cleaned = cased.strip_suffix(" -").unwrap_or(&cased).trim();
        if cleaned.is_empty() {
            return Err(Rejection::Empty);
        }

        if let Some(c) = cleaned.chars().find(|c| self.disallowed_chars.contains(c)) {
            return Err(Rejection::DisallowedCharacter(c));
        }

        trace!(raw = %raw, sanitized = %cleaned, "Sanitized suggestion");

        Ok(cleaned.to_string())
    }
}
