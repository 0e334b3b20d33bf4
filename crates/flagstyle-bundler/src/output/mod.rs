//! Output file helpers shared by plugins.

pub mod writer;

pub use writer::{copy_file, ensure_parent_dir, validate_output_path, write_file};
