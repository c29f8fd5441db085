use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use closer_migrate::config::{TARGET_PATH, load_options};
use closer_migrate::driver::run as run_migration;
use closer_migrate::rules::Rewrite;

#[derive(Parser)]
#[command(name = "closer-migrate")]
#[command(
	author,
	version,
	about = "Rewrites the pipeline service from SDR individual funnels to CLOSER funnels"
)]
struct Cli {
	/// Print how many replacements each rule made and warn about rules that matched nothing
	#[arg(long)]
	strict: bool,

	/// Write through a temporary file and rename it over the target
	#[arg(long)]
	atomic: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let options = load_options(&cwd)
		.context("Failed to load options")?
		.with_flags(cli.strict, cli.atomic);

	let target = Path::new(TARGET_PATH);
	let rewrite = run_migration(target, &options)
		.with_context(|| format!("Failed to migrate {}", target.display()))?;

	if options.strict {
		print_report(&rewrite);
	}

	println!("File updated successfully: {}", target.display());
	Ok(ExitCode::SUCCESS)
}

fn print_report(rewrite: &Rewrite) {
	println!("Rule report ({} replacements):", rewrite.total_replacements());
	for (i, outcome) in rewrite.outcomes.iter().enumerate() {
		if outcome.skipped {
			println!("  [{}] {}: skipped (already applied)", i + 1, outcome.name);
		} else {
			println!(
				"  [{}] {}: {} replacement(s)",
				i + 1,
				outcome.name,
				outcome.replacements
			);
		}
	}

	for outcome in rewrite.unmatched() {
		eprintln!("warning: rule {} matched nothing", outcome.name);
	}
}
