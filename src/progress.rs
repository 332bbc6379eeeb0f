//! Progress output for user-facing status updates.
//!
//! In verbose mode output is suppressed since tracing carries the same events.
//! In normal mode each file gets a short colored line on stderr while the
//! completion request is in flight and once its outcome is known.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        Self::new_with_ui(false, should_use_colors())
    }

    /// Create a progress reporter that respects UI mode
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    pub fn scan_start(&mut self, path: &Path) {
        if self.silent {
            return;
        }
        let line = format!("Scanning {}", path.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    pub fn scan_complete(&mut self, count: usize, dry_run: bool) {
        if self.silent {
            return;
        }
        let mode = if dry_run { " (noop: nothing will be renamed)" } else { "" };
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}{}",
                format!("Found {} entries", count).bold(),
                mode.yellow()
            );
        } else {
            let _ = writeln!(self.writer, "Found {} entries{}", count, mode);
        }
    }

    /// Report that a name is being requested (same line, completed later)
    pub fn request_start(&mut self, current: usize, total: usize, name: &str) {
        if self.silent {
            return;
        }
        let counter = format!("[{}/{}]", current, total);
        if self.colors_enabled {
            let _ = write!(self.writer, "{} {}...", counter.cyan(), name.dimmed());
        } else {
            let _ = write!(self.writer, "{} {}...", counter, name);
        }
        let _ = self.writer.flush();
    }

    /// Finish the request line
    pub fn request_complete(&mut self, proposed: bool) {
        if self.silent {
            return;
        }
        match (proposed, self.colors_enabled) {
            (true, true) => {
                let _ = writeln!(self.writer, " {}", "done".green());
            }
            (true, false) => {
                let _ = writeln!(self.writer, " done");
            }
            (false, true) => {
                let _ = writeln!(self.writer, " {}", "no answer".yellow());
            }
            (false, false) => {
                let _ = writeln!(self.writer, " no answer");
            }
        }
    }

    pub fn renamed(&mut self, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {} {} {}",
                "✓".green().bold(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "  Renamed: {} -> {}", from, to);
        }
    }

    pub fn would_rename(&mut self, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {} {} {}",
                "~".cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "  Would rename: {} -> {}", from, to);
        }
    }

    pub fn skipped(&mut self, name: &str, reason: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {}",
                "-".yellow().bold(),
                format!("Skipped {}: {}", name, reason).yellow()
            );
        } else {
            let _ = writeln!(self.writer, "  Skipped {}: {}", name, reason);
        }
    }

    /// Report a per-file error (non-fatal)
    pub fn failed(&mut self, name: &str, error: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {}",
                "✗".red().bold(),
                format!("Failed to rename {}: {}", name, error).red()
            );
        } else {
            let _ = writeln!(self.writer, "  Failed to rename {}: {}", name, error);
        }
    }
}
