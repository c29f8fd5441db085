use crate::config::types::{OPTIONS_FILE, RunOptions};
use crate::error::{MigrateError, Result};
use std::path::Path;

/// Parse an options file from the given path.
pub fn parse_options_file(path: &Path) -> Result<RunOptions> {
	let content =
		std::fs::read_to_string(path).map_err(|source| MigrateError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_options_str(&content, path)
}

/// Parse options from a string (useful for testing).
pub fn parse_options_str(content: &str, path: &Path) -> Result<RunOptions> {
	toml::from_str(content).map_err(|source| MigrateError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Load `.closer-migrate.toml` from `dir`, or defaults if there is none.
pub fn load_options(dir: &Path) -> Result<RunOptions> {
	let path = dir.join(OPTIONS_FILE);

	if path.exists() {
		parse_options_file(&path)
	} else {
		Ok(RunOptions::default())
	}
}
