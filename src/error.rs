use std::path::PathBuf;

/// Library-level structured errors for closer-migrate.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
	#[error("Target file not found: {path}")]
	TargetNotFound { path: PathBuf },

	#[error("Failed to read target file: {path}")]
	ReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write target file: {path}")]
	WriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid regex pattern in rule {rule}: {pattern}")]
	InvalidRegex {
		rule: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Rule {rule} has an empty pattern")]
	EmptyPattern { rule: String },

	#[error("Rule {rule} depends on {dependency}, which does not run before it")]
	RuleOrder { rule: String, dependency: String },

	#[error("Failed to read options file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse options file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// Result type alias using MigrateError.
pub type Result<T> = std::result::Result<T, MigrateError>;
