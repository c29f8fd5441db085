//! closer-migrate - one-shot rewrite of the pipeline service from SDR to CLOSER funnels.
//!
//! This library provides the pieces the binary strings together:
//! - An ordered table of literal and regex replacement rules
//! - A rewriter that applies them to a text buffer and reports per-rule matches
//! - A driver that reads the target file, rewrites it, and writes it back
//! - Optional run options loaded from `.closer-migrate.toml`
//!
//! # Example
//!
//! ```no_run
//! use closer_migrate::config::{RunOptions, TARGET_PATH};
//! use closer_migrate::driver::run;
//! use std::path::Path;
//!
//! let rewrite = run(Path::new(TARGET_PATH), &RunOptions::default()).unwrap();
//! for outcome in rewrite.unmatched() {
//!     println!("no match: {}", outcome.name);
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod rules;

pub use error::{MigrateError, Result};
