use serde::Deserialize;

/// The service file rewritten by the migration, relative to the working directory.
pub const TARGET_PATH: &str = "backend/src/services/pipedriveService.ts";

/// Optional options file looked up in the working directory.
pub const OPTIONS_FILE: &str = ".closer-migrate.toml";

/// Opt-in behaviors. Everything defaults to off, which reproduces a plain
/// read, rewrite, overwrite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RunOptions {
	/// Print a per-rule replacement report and flag rules that matched nothing.
	#[serde(default)]
	pub strict: bool,

	/// Write through a temporary file in the same directory, then rename it over the target.
	#[serde(default)]
	pub atomic: bool,
}

impl RunOptions {
	/// Turn on any option requested on the command line. Flags never turn options off.
	pub fn with_flags(self, strict: bool, atomic: bool) -> Self {
		RunOptions {
			strict: self.strict || strict,
			atomic: self.atomic || atomic,
		}
	}
}
