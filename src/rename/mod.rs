mod renamer;
mod types;

pub use renamer::{DirectoryRenamer, RenameOptions};
pub use types::{FileOutcome, NoProposalPolicy, RenamePlan, RenameReport, SkipReason};
