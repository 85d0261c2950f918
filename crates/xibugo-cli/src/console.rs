//! CLI console utilities

use colored::*;

/// CLI console for formatted status lines
///
/// Command results are printed plainly by the handlers; this is only for
/// progress and diagnostics around them.
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }
}

impl Default for CliConsole {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Utility functions for console formatting
pub mod format {
    use colored::*;

    /// Format a file path
    pub fn path(path: &std::path::Path) -> String {
        path.display().to_string().cyan().to_string()
    }
}
