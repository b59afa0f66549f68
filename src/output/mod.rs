//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Run summary reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_error, print_info, print_run_summary, print_status, print_status_warning,
    print_success, print_warning,
};
pub use progress::create_item_bar;
pub use stats::{format_image_listing, print_download_stats, print_summary};
