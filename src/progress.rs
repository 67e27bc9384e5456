//! User-facing status output on stderr.
//!
//! In verbose mode output is suppressed, since tracing already covers every
//! step. In normal mode a short colored line per phase gives feedback while
//! files move.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    colors_enabled: bool,
}

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
    /// Progress reporter writing to stderr.
    pub fn new() -> Self {
        let colors_enabled = should_use_colors();
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled,
        }
    }

    /// Reporter that stays quiet when verbose logging is active.
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Reporter that swallows everything (tests, library callers).
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Reporter with a custom writer (for testing).
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    pub fn scan_start(&mut self, path: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Scanning {}...", path.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "Scanning {}...", path.display());
        }
    }

    pub fn plan_summary(&mut self, sequences: usize, renames: usize) {
        if self.silent {
            return;
        }
        let _ = writeln!(
            self.writer,
            "{} sequence(s) found, {} file(s) to renumber",
            sequences, renames
        );
    }

    /// One line per executed rename.
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    pub fn complete(&mut self, count: usize, preview: bool) {
        if self.silent {
            return;
        }
        if count == 0 {
            let _ = writeln!(self.writer, "All sequences are already compact.");
        } else if preview {
            if self.colors_enabled {
                let _ = writeln!(
                    self.writer,
                    "{}",
                    format!("Preview complete. {} file(s) would be renumbered.", count).dimmed()
                );
            } else {
                let _ = writeln!(
                    self.writer,
                    "Preview complete. {} file(s) would be renumbered.",
                    count
                );
            }
        } else if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("{} file(s) renumbered", count).green()
            );
        } else {
            let _ = writeln!(self.writer, "{} file(s) renumbered.", count);
        }
    }

    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }
}
