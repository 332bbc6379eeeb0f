use crate::rename::{FileOutcome, RenameReport};
use std::io::{self, Write};

/// Display noop results in a formatted output
pub fn display_dry_run(report: &RenameReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              NOOP")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Entries: {}", report.len())?;
    writeln!(writer)?;

    if report.would_rename_count() == 0 {
        writeln!(writer, "No files to rename.")?;
    } else {
        writeln!(writer, "Planned changes:")?;
        writeln!(writer)?;

        let planned = report.outcomes.iter().filter_map(|o| match o {
            FileOutcome::WouldRename(plan) => Some(plan),
            _ => None,
        });

        for (i, plan) in planned.enumerate() {
            writeln!(writer, "  {}. From: {}", i + 1, plan.source_name)?;
            writeln!(writer, "     To:   {}", plan.destination_name)?;

            if plan.from_fallback {
                writeln!(writer, "     [!] Name derived from the original filename")?;
            }

            writeln!(writer)?;
        }
    }

    write_skipped(report, writer)?;

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} files would be renamed",
        report.would_rename_count()
    )?;
    writeln!(writer, "  {} files skipped", report.skipped_count())?;

    writeln!(writer)?;
    writeln!(writer, "Run without --noop to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-noop)
pub fn display_execution_result(report: &RenameReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Renamed {} files.", report.renamed_count())?;

    let skipped = report.skipped_count();
    if skipped > 0 {
        writeln!(writer, "  {} files skipped.", skipped)?;
    }

    let fallback = report.fallback_count();
    if fallback > 0 {
        writeln!(
            writer,
            "  {} names derived from the original filename.",
            fallback
        )?;
    }

    let failed = report.failed_count();
    if failed > 0 {
        writeln!(writer, "  {} renames failed:", failed)?;
        for outcome in &report.outcomes {
            if let FileOutcome::Failed { plan, error } = outcome {
                writeln!(
                    writer,
                    "    - {} -> {}: {}",
                    plan.source_name, plan.destination_name, error
                )?;
            }
        }
    }

    Ok(())
}

fn write_skipped(report: &RenameReport, writer: &mut impl Write) -> io::Result<()> {
    if report.skipped_count() == 0 {
        return Ok(());
    }

    writeln!(writer, "Skipped:")?;
    for outcome in &report.outcomes {
        if let FileOutcome::Skipped { name, reason } = outcome {
            writeln!(writer, "  - {} ({})", name, reason)?;
        }
    }
    writeln!(writer)?;

    Ok(())
}
