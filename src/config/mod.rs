//! Run options for closer-migrate.
//!
//! This module handles:
//! - The fixed target path and options file name
//! - TOML options file parsing

pub mod parser;
pub mod types;

pub use parser::{load_options, parse_options_file, parse_options_str};
pub use types::{OPTIONS_FILE, RunOptions, TARGET_PATH};
