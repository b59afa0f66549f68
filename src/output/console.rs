//! Console output utilities.

use console::style;
use indicatif::ProgressBar;

use crate::config::{CollisionPolicy, FailurePolicy};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a status line above a visible progress bar, or as plain info.
pub fn print_status(bar: Option<&ProgressBar>, message: &str) {
    match bar {
        Some(bar) if !bar.is_hidden() => {
            bar.println(format!("{} {}", style("INFO").cyan().bold(), message))
        }
        _ => print_info(message),
    }
}

/// Print a warning above a visible progress bar, or as a plain warning.
pub fn print_status_warning(bar: Option<&ProgressBar>, message: &str) {
    match bar {
        Some(bar) if !bar.is_hidden() => {
            bar.println(format!("{} {}", style("WARN").yellow().bold(), message))
        }
        _ => print_warning(message),
    }
}

/// Print the run configuration.
pub fn print_run_summary(
    query: &str,
    directory: &str,
    max_pages: u32,
    max_images: usize,
    failure_policy: FailurePolicy,
    collision_policy: CollisionPolicy,
) {
    println!();
    println!("{}", style("Search:").bold());
    println!("  Query: {}", query);
    println!("  Directory: {}", directory);
    println!("  Limits: {} pages, ~{} images", max_pages, max_images);
    println!(
        "  On failure: {}, on same-second names: {}",
        failure_policy, collision_policy
    );
    println!();
}
