//! Word lists for the reference driver
//!
//! The core only consumes in-memory collections; this module turns a
//! one-word-per-line file into one.

mod loader;

pub use loader::{load_from_file, parse_list};
