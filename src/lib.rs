pub mod cli;
pub mod completion;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod output;
pub mod progress;
pub mod rename;
pub mod requester;
pub mod sanitizer;
pub mod scanner;
pub mod title_case;

pub use completion::{CompletionError, CompletionRequest, CompletionService, OpenAiClient};
pub use error::{AppError, ExitCode};
pub use rename::{DirectoryRenamer, FileOutcome, NoProposalPolicy, RenameOptions, RenameReport};
pub use requester::{detect_year, FilenameRequester, RequesterConfig};
pub use sanitizer::{Rejection, ResponseSanitizer};
pub use scanner::{scan_directory, DirectoryEntry, ScannerError};
pub use title_case::{title_case, TitleCaseError};

// Serializes tests that touch process environment variables
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
