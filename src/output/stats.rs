//! Run summary reporting.

use std::fmt::Write;

use console::style;
use indicatif::HumanBytes;

use crate::download::{DownloadState, RunReport};
use crate::media::ImageDescriptor;

/// Format the image listing: a total line followed by one line per image
/// with its local creation time and URL.
pub fn format_image_listing(images: &[ImageDescriptor]) -> String {
    let mut out = format!("Got a total of {} images:\n", images.len());
    for image in images {
        let _ = writeln!(out, "    [{}] {}", image.local_timestamp(), image.url);
    }
    out
}

/// Print the final summary for a run.
pub fn print_summary(report: &RunReport) {
    println!();
    print!("{}", format_image_listing(&report.images));
    println!();
    print_download_stats(&report.state);
}

/// Print download counters and any failures.
pub fn print_download_stats(state: &DownloadState) {
    println!("{}", style("Downloads:").bold());
    println!(
        "  Saved:    {} ({})",
        style(state.download_count()).green(),
        HumanBytes(state.bytes_written)
    );
    println!("  Existing: {}", style(state.skipped_count()).yellow());
    if state.collision_count > 0 {
        println!(
            "  Same-second collisions: {}",
            style(state.collision_count).yellow()
        );
    }
    if state.failed_count() > 0 {
        println!("  Failed:   {}", style(state.failed_count()).red());
        for failure in &state.failures {
            println!("    {} ({})", failure.url, failure.error);
        }
    }
    println!();
}
