//! File I/O for the migration.
//!
//! This module handles:
//! - Reading the target file fully into memory
//! - Running the rule table over it
//! - Writing the result back, either directly or through a temp file + rename

use crate::config::RunOptions;
use crate::error::{MigrateError, Result};
use crate::rules::{RULES, ReplacementRule, Rewrite, apply_compiled, compile_rules};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Rewrite `path` in place with the migration's rule table.
pub fn run(path: &Path, options: &RunOptions) -> Result<Rewrite> {
	run_with(path, RULES, options)
}

/// Rewrite `path` in place with an explicit rule table.
///
/// Rules are compiled before the file is opened, so a bad pattern never
/// touches the target. Nothing is written unless reading succeeded.
pub fn run_with(path: &Path, rules: &[ReplacementRule], options: &RunOptions) -> Result<Rewrite> {
	let compiled = compile_rules(rules)?;

	let content = read_target(path)?;
	let rewrite = apply_compiled(content, &compiled);

	if options.atomic {
		write_atomic(path, &rewrite.text)?;
	} else {
		write_direct(path, &rewrite.text)?;
	}

	Ok(rewrite)
}

/// Read the whole target file as UTF-8.
pub fn read_target(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			MigrateError::TargetNotFound {
				path: path.to_path_buf(),
			}
		} else {
			MigrateError::ReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})
}

/// Overwrite the target in place. A failure mid-write can leave it truncated.
fn write_direct(path: &Path, content: &str) -> Result<()> {
	std::fs::write(path, content).map_err(|source| MigrateError::WriteError {
		path: path.to_path_buf(),
		source,
	})
}

/// Write to a temp file next to the target, then rename it over the target.
///
/// A read-only target is refused, as a direct overwrite would be, since the
/// rename would otherwise replace it regardless of its permissions.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
	let write_error = |source: std::io::Error| MigrateError::WriteError {
		path: path.to_path_buf(),
		source,
	};

	let permissions = std::fs::metadata(path).map_err(write_error)?.permissions();
	if permissions.readonly() {
		return Err(write_error(std::io::Error::new(
			std::io::ErrorKind::PermissionDenied,
			"target file is read-only",
		)));
	}

	let parent_dir = path
		.parent()
		.filter(|p| !p.as_os_str().is_empty())
		.unwrap_or(Path::new("."));

	let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(write_error)?;
	temp_file.write_all(content.as_bytes()).map_err(write_error)?;
	temp_file.as_file().sync_all().map_err(write_error)?;

	// Carry the original permissions over to the replacement.
	std::fs::set_permissions(temp_file.path(), permissions).map_err(write_error)?;

	temp_file.persist(path).map_err(|e| write_error(e.error))?;

	Ok(())
}
