//! Console output system for recipsum
//!
//! Provides consistent styled output for all commands: status symbols,
//! key/value report lines, and verbose diagnostics.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a section header
    pub fn header(&self, message: &str) {
        if !self.quiet {
            println!("{}", style(message).bold());
        }
    }

    /// Print an aligned key/value report line
    pub fn key_value(&self, label: &str, value: &str, highlight: bool) {
        if self.quiet {
            return;
        }
        let value = if highlight {
            style(value).green().bold().to_string()
        } else {
            value.to_string()
        };
        println!("  {} {}", style(label).dim(), value);
    }

    /// Print an empty line for spacing
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }
}
