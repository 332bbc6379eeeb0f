mod codes;

pub use codes::ExitCode;

use crate::completion::CompletionError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. All of them happen before any file is touched.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No target directory given")]
    MissingDirectory { env_var: &'static str },

    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Missing API credential: {var} is not set")]
    MissingCredential { var: &'static str },

    #[error("Failed to set up completion client: {message}")]
    ClientSetup { message: String },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::ConfigurationError
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::MissingDirectory { env_var } => {
                format!(
                    "No target directory was given.\n\n\
                     Pass the directory as an argument or set {} \
                     in the environment or a .env file.",
                    env_var
                )
            }

            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The path {} is not a valid directory.\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::MissingCredential { var } => {
                format!(
                    "Please set your API key in a .env file or as the {} \
                     environment variable.",
                    var
                )
            }

            AppError::ClientSetup { message } => {
                format!(
                    "Failed to set up the completion client:\n  {}\n\n\
                     Check OPENAI_BASE_URL and your TLS configuration.",
                    message
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::NotConfigured => AppError::MissingCredential {
                var: crate::completion::ENV_API_KEY,
            },
            other => AppError::ClientSetup {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fatal_errors_exit_with_one() {
        let errors = [
            AppError::MissingDirectory {
                env_var: "CONCERT_RENAMER_DIR",
            },
            AppError::NotADirectory {
                path: PathBuf::from("/test"),
            },
            AppError::MissingCredential {
                var: "OPENAI_API_KEY",
            },
            AppError::Other("boom".to_string()),
        ];

        for err in errors {
            assert_eq!(i32::from(err.exit_code()), 1);
        }
    }

    #[test]
    fn test_detailed_message_includes_context() {
        let err = AppError::NotADirectory {
            path: PathBuf::from("/music/show.mp3"),
        };
        let msg = err.detailed_message();
        assert!(msg.contains("/music/show.mp3"));
        assert!(msg.contains("not a valid directory"));

        let err = AppError::MissingCredential {
            var: "OPENAI_API_KEY",
        };
        assert!(err.detailed_message().contains("OPENAI_API_KEY"));

        let err = AppError::MissingDirectory {
            env_var: "CONCERT_RENAMER_DIR",
        };
        assert!(err.detailed_message().contains("CONCERT_RENAMER_DIR"));
    }

    #[test]
    fn test_scanner_error_conversion() {
        let app_err: AppError = ScannerError::PathNotFound(PathBuf::from("/missing")).into();
        assert!(matches!(app_err, AppError::DirectoryNotFound { .. }));

        let app_err: AppError = ScannerError::NotADirectory(PathBuf::from("/file")).into();
        assert!(matches!(app_err, AppError::NotADirectory { .. }));
    }

    #[test]
    fn test_completion_error_conversion() {
        let app_err: AppError = CompletionError::NotConfigured.into();
        assert!(matches!(
            app_err,
            AppError::MissingCredential {
                var: "OPENAI_API_KEY"
            }
        ));

        let app_err: AppError = CompletionError::NetworkError("tls".to_string()).into();
        assert!(matches!(app_err, AppError::ClientSetup { .. }));
    }
}
