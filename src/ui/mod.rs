//! Terminal UI helpers for fix reporting.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;

use crate::entities::{FixSummary, TaskFix};

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print one line for a corrected task
pub fn print_fix(fix: &TaskFix, show_tag: bool) {
    if show_tag {
        println!(
            "  {} [{}] Task {}: sorted {} subtask(s)",
            "•".cyan(),
            fix.tag.dimmed(),
            fix.task_id.bold(),
            fix.subtask_count
        );
    } else {
        println!(
            "  {} Task {}: sorted {} subtask(s)",
            "•".cyan(),
            fix.task_id.bold(),
            fix.subtask_count
        );
    }
}

/// Print the run summary
pub fn print_summary(summary: &FixSummary) {
    let show_tag = summary.tags.len() > 1;

    for fix in &summary.fixes {
        print_fix(fix, show_tag);
    }

    if summary.fixes.is_empty() {
        print_info("All subtasks already in order");
    }
    print_success(&format!("Fixed {} task(s)", summary.fixed_count()));

    if !summary.written {
        print_warning("Dry run: file not modified");
    }
}
