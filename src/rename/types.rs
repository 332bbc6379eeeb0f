use std::fmt;
use std::path::PathBuf;

use crate::sanitizer::Rejection;

/// What to do when the completion service yields no proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NoProposalPolicy {
    /// Leave the file alone
    #[default]
    Skip,
    /// Title-case the original name with underscores and hyphens as spaces
    FallbackTitleCase,
}

/// A single planned rename within one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Full path to the source entry
    pub source_path: PathBuf,
    /// Original file name
    pub source_name: String,
    /// Full path to the destination
    pub destination_path: PathBuf,
    /// New file name
    pub destination_name: String,
    /// Whether the name came from the local fallback instead of the service
    pub from_fallback: bool,
}

impl RenamePlan {
    pub fn new(source_path: PathBuf, destination_name: String, from_fallback: bool) -> Self {
        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
            from_fallback,
        }
    }

    /// True when only the letter case differs between the two names
    pub fn is_case_only_change(&self) -> bool {
        self.source_name != self.destination_name
            && self.source_name.to_lowercase() == self.destination_name.to_lowercase()
    }
}

/// Why a file was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoProposal,
    Rejected(Rejection),
    Unchanged,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoProposal => write!(f, "no name proposed"),
            SkipReason::Rejected(rejection) => write!(f, "{}", rejection),
            SkipReason::Unchanged => write!(f, "already named"),
        }
    }
}

/// Terminal state of one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Renamed(RenamePlan),
    WouldRename(RenamePlan),
    Skipped { name: String, reason: SkipReason },
    Failed { plan: RenamePlan, error: String },
}

impl FileOutcome {
    pub fn source_name(&self) -> &str {
        match self {
            FileOutcome::Renamed(plan) | FileOutcome::WouldRename(plan) => &plan.source_name,
            FileOutcome::Skipped { name, .. } => name,
            FileOutcome::Failed { plan, .. } => &plan.source_name,
        }
    }
}

/// Outcomes of one pass over a directory, in listing order
#[derive(Debug, Clone)]
pub struct RenameReport {
    pub outcomes: Vec<FileOutcome>,
    pub dry_run: bool,
}

impl RenameReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            dry_run,
        }
    }

    pub fn add(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn renamed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Renamed(_)))
    }

    pub fn would_rename_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::WouldRename(_)))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    pub fn fallback_count(&self) -> usize {
        self.count(|o| match o {
            FileOutcome::Renamed(plan) | FileOutcome::WouldRename(plan) => plan.from_fallback,
            _ => false,
        })
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(*o)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_plan_new() {
        let plan = RenamePlan::new(
            PathBuf::from("/concerts/queen_wembley_1986.mkv"),
            "Queen - Live at Wembley - 1986.mkv".to_string(),
            false,
        );

        assert_eq!(plan.source_name, "queen_wembley_1986.mkv");
        assert_eq!(plan.destination_name, "Queen - Live at Wembley - 1986.mkv");
        assert_eq!(
            plan.destination_path,
            PathBuf::from("/concerts/Queen - Live at Wembley - 1986.mkv")
        );
        assert!(!plan.from_fallback);
    }

    #[test]
    fn test_case_only_change() {
        let plan = RenamePlan::new(
            PathBuf::from("/c/queen live.mkv"),
            "Queen Live.mkv".to_string(),
            false,
        );
        assert!(plan.is_case_only_change());

        let plan = RenamePlan::new(PathBuf::from("/c/a.mkv"), "b.mkv".to_string(), false);
        assert!(!plan.is_case_only_change());
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::NoProposal.to_string(), "no name proposed");
        assert_eq!(SkipReason::Unchanged.to_string(), "already named");
        assert!(SkipReason::Rejected(Rejection::DisallowedCharacter('?'))
            .to_string()
            .contains("'?'"));
    }

    #[test]
    fn test_rename_report_counts() {
        let mut report = RenameReport::new(false);
        assert!(report.is_empty());

        let plan = |name: &str, fallback| {
            RenamePlan::new(PathBuf::from("/c/x.mp3"), name.to_string(), fallback)
        };

        report.add(FileOutcome::Renamed(plan("A.mp3", false)));
        report.add(FileOutcome::Renamed(plan("B.mp3", true)));
        report.add(FileOutcome::Skipped {
            name: "c.mp3".to_string(),
            reason: SkipReason::NoProposal,
        });
        report.add(FileOutcome::Failed {
            plan: plan("D.mp3", false),
            error: "exists".to_string(),
        });

        assert_eq!(report.len(), 4);
        assert_eq!(report.renamed_count(), 2);
        assert_eq!(report.would_rename_count(), 0);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.fallback_count(), 1);
        assert_eq!(report.outcomes[2].source_name(), "c.mp3");
    }
}
