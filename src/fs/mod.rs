//! Filesystem module.
//!
//! Provides:
//! - Output folder resolution and creation
//! - Directory and file name generation

pub mod naming;
pub mod paths;

pub use naming::{query_to_dir_name, AllocatedName, FilenameAllocator};
pub use paths::{ensure_dir, get_query_folder};
