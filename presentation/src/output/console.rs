//! Console output formatting

use colored::Colorize;
use playground_domain::ModelId;

/// Formats answers and catalog listings for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an answer with its role marker.
    pub fn format_answer(model: &ModelId, answer: &str) -> String {
        format!("{}\n{}", format!("[{}]", model).cyan().bold(), answer)
    }

    /// Format an error for display.
    pub fn format_error(err: &dyn std::error::Error) -> String {
        format!("{} {}", "Error:".red().bold(), err)
    }

    /// Format the model catalog, grouped by identifier order.
    pub fn format_catalog() -> String {
        let mut out = String::from("Available models:\n");
        for model in ModelId::catalog() {
            let vendor = model.vendor().map(|v| v.as_str()).unwrap_or("unknown");
            // Pad before coloring so the ANSI codes don't skew the column
            out.push_str(&format!("  {} {}\n", format!("{:10}", vendor).yellow(), model));
        }
        out
    }
}
