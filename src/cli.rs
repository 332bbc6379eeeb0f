use clap::Parser;
use std::path::PathBuf;

use crate::rename::NoProposalPolicy;
use crate::requester::{DEFAULT_MAX_TOKENS, DEFAULT_OUTPUT_FORMAT, DEFAULT_TEMPERATURE};

/// Environment variable consulted when no directory argument is given
pub const ENV_DEFAULT_DIR: &str = "CONCERT_RENAMER_DIR";

#[derive(Parser, Debug)]
#[command(name = "concert-renamer")]
#[command(author, version, long_about = None)]
#[command(about = "Rename concert recordings to standardized names using a chat-completion model")]
pub struct Args {
    /// Directory containing the concert files (defaults to $CONCERT_RENAMER_DIR)
    pub target_dir: Option<PathBuf>,

    /// Report intended renames without touching the filesystem
    #[arg(short, long)]
    pub noop: bool,

    /// Free-text description of the desired name
    #[arg(short = 'f', long, default_value = DEFAULT_OUTPUT_FORMAT, value_name = "TEMPLATE")]
    pub output_format: String,

    /// What to do when the model gives no usable answer
    #[arg(long, value_enum, default_value_t = NoProposalPolicy::Skip)]
    pub on_no_proposal: NoProposalPolicy,

    /// Completion model (defaults to $OPENAI_MODEL, then gpt-3.5-turbo)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Maximum length of the model's answer, in tokens
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Sampling temperature; keep low for repeatable names
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Extra phrase marking a refusal (repeatable, case-insensitive)
    #[arg(long = "failure-marker", value_name = "PHRASE")]
    pub failure_markers: Vec<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Directory from the argument, else from `CONCERT_RENAMER_DIR`
pub fn resolve_target_dir(arg: Option<PathBuf>) -> Option<PathBuf> {
    arg.or_else(|| {
        std::env::var_os(ENV_DEFAULT_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}
