//! Media module for image descriptors and extraction.

pub mod item;
pub mod parser;

pub use item::ImageDescriptor;
pub use parser::{extract_images, extract_page_images};
