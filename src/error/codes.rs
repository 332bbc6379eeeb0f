#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// Fatal startup problem: directory, credential or client setup
    ConfigurationError = 1,
    /// Unparsable or out-of-range command-line arguments
    InvalidArguments = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}
