//! CLI console utilities

use alfred_core::UserFriendlyError;
use colored::*;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message, only in verbose mode
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
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a list item
    pub fn item(&self, message: &str) {
        println!("  {} {}", "•".dimmed(), message);
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print a table header
    pub fn print_table_header(&self, headers: &[&str]) {
        let header_line = headers
            .iter()
            .map(|h| format!("{:12}", h.bold()))
            .collect::<Vec<_>>()
            .join(" | ");

        println!("{header_line}");
        println!("{}", "-".repeat(header_line.len()).dimmed());
    }

    /// Print a table row
    pub fn print_table_row(&self, cells: &[&str]) {
        let row_line = cells
            .iter()
            .map(|c| format!("{:12}", c))
            .collect::<Vec<_>>()
            .join(" | ");

        println!("{row_line}");
    }

    /// Print a failed command with its category, message and suggestions
    pub fn print_error(&self, error: &UserFriendlyError) {
        self.error(&format!("{}: {}", error.category.display_name(), error.title));
        eprintln!();
        for line in error.message.lines() {
            eprintln!("  {}", line);
        }
        if !error.suggestions.is_empty() {
            eprintln!();
            eprintln!("{}", "Suggested actions:".bold());
            for (i, suggestion) in error.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
        }
        if self.verbose && !error.error_code.is_empty() {
            eprintln!("{}", format!("[{}]", error.error_code).dimmed());
        }
    }
}
