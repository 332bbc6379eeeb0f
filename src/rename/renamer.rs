use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::completion::CompletionService;
use crate::fallback::fallback_name;
use crate::progress::Progress;
use crate::requester::FilenameRequester;
use crate::sanitizer::ResponseSanitizer;
use crate::scanner::DirectoryEntry;

use super::types::{FileOutcome, NoProposalPolicy, RenamePlan, RenameReport, SkipReason};

/// Options for one renaming pass
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
    pub on_no_proposal: NoProposalPolicy,
}

/// Drives the per-file pipeline: request, sanitize, then rename or report
pub struct DirectoryRenamer<S> {
    requester: FilenameRequester<S>,
    sanitizer: ResponseSanitizer,
    options: RenameOptions,
}

impl<S: CompletionService> DirectoryRenamer<S> {
    pub fn new(
        requester: FilenameRequester<S>,
        sanitizer: ResponseSanitizer,
        options: RenameOptions,
    ) -> Self {
        Self {
            requester,
            sanitizer,
            options,
        }
    }

    /// Process every entry in order. A failing entry never stops the batch.
    pub fn rename_all(&self, entries: &[DirectoryEntry], progress: &mut Progress) -> RenameReport {
        let mut report = RenameReport::new(self.options.dry_run);
        let total = entries.len();

        info!(
            "Processing {} entries{}",
            total,
            if self.options.dry_run { " (noop)" } else { "" }
        );

        for (i, entry) in entries.iter().enumerate() {
            progress.request_start(i + 1, total, &entry.name);
            let proposal = self.requester.propose_filename(&entry.name);
            progress.request_complete(proposal.is_some());

            let outcome = self.decide(entry, proposal);

            match &outcome {
                FileOutcome::Renamed(plan) => {
                    info!("Renamed: {} -> {}", plan.source_name, plan.destination_name);
                    progress.renamed(&plan.source_name, &plan.destination_name);
                }
                FileOutcome::WouldRename(plan) => {
                    info!(
                        "Would rename: {} -> {}",
                        plan.source_name, plan.destination_name
                    );
                    progress.would_rename(&plan.source_name, &plan.destination_name);
                }
                FileOutcome::Skipped { name, reason } => {
                    info!("Skipping {}: {}", name, reason);
                    progress.skipped(name, &reason.to_string());
                }
                FileOutcome::Failed { plan, error } => {
                    warn!(
                        "Failed to rename {} -> {}: {}",
                        plan.source_name, plan.destination_name, error
                    );
                    progress.failed(&plan.source_name, error);
                }
            }

            report.add(outcome);
        }

        report
    }

    /// Run the pipeline for a single entry
    pub fn process_entry(&self, entry: &DirectoryEntry) -> FileOutcome {
        let proposal = self.requester.propose_filename(&entry.name);
        self.decide(entry, proposal)
    }

    fn decide(&self, entry: &DirectoryEntry, proposal: Option<String>) -> FileOutcome {
        let plan = match self.plan(entry, proposal) {
            Ok(plan) => plan,
            Err(reason) => {
                return FileOutcome::Skipped {
                    name: entry.name.clone(),
                    reason,
                }
            }
        };

        if self.options.dry_run {
            return FileOutcome::WouldRename(plan);
        }

        match apply_rename(&plan) {
            Ok(()) => FileOutcome::Renamed(plan),
            Err(e) => FileOutcome::Failed {
                plan,
                error: e.to_string(),
            },
        }
    }

    fn plan(
        &self,
        entry: &DirectoryEntry,
        proposal: Option<String>,
    ) -> Result<RenamePlan, SkipReason> {
        let (candidate, from_fallback) = match proposal {
            Some(suggestion) => (suggestion, false),
            None => match self.options.on_no_proposal {
                NoProposalPolicy::Skip => return Err(SkipReason::NoProposal),
                NoProposalPolicy::FallbackTitleCase => {
                    let name = fallback_name(&entry.name).ok_or(SkipReason::NoProposal)?;
                    debug!(file = %entry.name, fallback = %name, "Using fallback name");
                    (name, true)
                }
            },
        };

        let destination_name = self
            .sanitizer
            .sanitize(&candidate)
            .map_err(SkipReason::Rejected)?;

        if destination_name == entry.name {
            return Err(SkipReason::Unchanged);
        }

        Ok(RenamePlan::new(
            entry.path.clone(),
            destination_name,
            from_fallback,
        ))
    }
}

/// Rename in place, refusing to overwrite an existing entry
fn apply_rename(plan: &RenamePlan) -> io::Result<()> {
    let taken = if plan.is_case_only_change() {
        // A case-insensitive lookup would find the source itself
        has_exact_entry(&plan.destination_path)?
    } else {
        plan.destination_path.exists()
    };

    if taken {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination already exists: {}", plan.destination_name),
        ));
    }

    fs::rename(&plan.source_path, &plan.destination_path)
}

/// True when the parent directory holds an entry named exactly like `path`
fn has_exact_entry(path: &Path) -> io::Result<bool> {
    let Some(name) = path.file_name() else {
        return Ok(false);
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    for entry in fs::read_dir(parent)? {
        if entry?.file_name() == name {
            return Ok(true);
        }
    }

    Ok(false)
}
