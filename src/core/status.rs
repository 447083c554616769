//! Human-readable status lines on stderr

use colored::Colorize;

const RULE_WIDTH: usize = 50;

/// Console status printer.
///
/// Status goes to stderr; stdout is reserved for the rendered report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Status {
    quiet: bool,
    verbose: bool,
}

impl Status {
    pub fn new(quiet: bool, verbose: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { quiet, verbose }
    }

    /// A line that is only printed without --quiet
    pub fn info(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{}", message.as_ref());
        }
    }

    /// A line that is only printed with --verbose
    pub fn debug(&self, message: impl AsRef<str>) {
        if self.verbose && !self.quiet {
            eprintln!("{}", message.as_ref().dimmed());
        }
    }

    pub fn step(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{} {}", "→".cyan(), message.as_ref());
        }
    }

    pub fn success(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{} {}", "✓".green(), message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message.as_ref().yellow());
        }
    }

    /// Errors are printed even in quiet mode
    pub fn error(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "[ERROR]".red().bold(), message.as_ref());
    }

    /// A title framed by rules of `=`
    pub fn banner(&self, title: &str) {
        if self.quiet {
            return;
        }
        let rule = "=".repeat(RULE_WIDTH);
        eprintln!("{}", rule);
        eprintln!(" {}", title.bold());
        eprintln!("{}", rule);
        eprintln!();
    }

    pub fn blank(&self) {
        if !self.quiet {
            eprintln!();
        }
    }
}
