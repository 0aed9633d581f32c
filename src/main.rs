use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use import_relink::config::{
	Overrides, RULE_FILE_NAME, Settings, generate_init_template, load_settings,
};
use import_relink::logging::init_cli_logger;
use import_relink::rewrite::{FileOutcome, WriteMode};
use import_relink::rules::RuleTable;
use import_relink::run::{RunOptions, resolve_root, run};

#[derive(Parser)]
#[command(name = "relink")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting relative import paths after a module reorganization"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Directory to walk [default: src/modules]
	#[arg(long, value_name = "DIR", global = true)]
	root: Option<PathBuf>,

	/// Suffix of files to rewrite [default: .ts]
	#[arg(
		long,
		value_name = "SUFFIX",
		global = true,
		value_parser = clap::builder::NonEmptyStringValueParser::new()
	)]
	ext: Option<String>,

	/// Rule file to use instead of ./.relink.toml
	#[arg(long, value_name = "FILE", global = true)]
	rules: Option<PathBuf>,

	/// Report what would change without writing anything
	#[arg(long)]
	dry_run: bool,

	/// Create a template .relink.toml with the built-in rules in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .relink.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Show debug logging on stderr
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Rule table commands
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
}

#[derive(Subcommand)]
enum RulesAction {
	/// Display the effective rule table in application order
	Show,
	/// Compile every rule without touching any file
	Validate,
}

fn main() -> ExitCode {
	match run_cli() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run_cli() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_cli_logger(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	let settings = effective_settings(&cli)?;

	if let Some(command) = cli.command {
		return match command {
			Commands::Rules { action } => match action {
				RulesAction::Show => handle_rules_show(&settings),
				RulesAction::Validate => handle_rules_validate(&settings),
			},
		};
	}

	let mode = if cli.dry_run {
		WriteMode::DryRun
	} else {
		WriteMode::Apply
	};
	handle_rewrite(&settings, mode)
}

fn effective_settings(cli: &Cli) -> Result<Settings> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let overrides = Overrides {
		root: cli.root.clone(),
		extension: cli.ext.clone(),
	};
	load_settings(&overrides, cli.rules.as_deref(), &cwd).context("Failed to load rule file")
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let path = PathBuf::from(RULE_FILE_NAME);

	if path.exists() && !force {
		anyhow::bail!("{RULE_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template().context("Failed to render rule file")?;
	std::fs::write(&path, template)
		.with_context(|| format!("Failed to write {}", path.display()))?;

	println!("Created {RULE_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rules_show(settings: &Settings) -> Result<ExitCode> {
	println!("# Source: {}", settings.rule_source);
	println!("# root: {}", settings.root.display());
	println!("# extension: {}", settings.extension);
	println!("# rules: {}", settings.rules.len());
	println!();

	for (i, rule) in settings.rules.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    pattern: {}", rule.pattern);
		println!("    replacement: {}", rule.replacement);
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules_validate(settings: &Settings) -> Result<ExitCode> {
	match RuleTable::compile(&settings.rules) {
		Ok(table) => {
			println!(
				"All rules are valid: {} ({} rules)",
				settings.rule_source,
				table.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Rule error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_rewrite(settings: &Settings, mode: WriteMode) -> Result<ExitCode> {
	let table = RuleTable::compile(&settings.rules).context("Failed to compile rules")?;
	let root = resolve_root(&settings.root)
		.with_context(|| format!("Failed to rewrite {}", settings.root.display()))?;
	let options = RunOptions {
		root: root.clone(),
		extension: settings.extension.clone(),
		mode,
	};

	println!(
		"Rewriting imports in {} (*{}, {} rules{})",
		root.display(),
		settings.extension,
		table.len(),
		if mode == WriteMode::DryRun { ", dry run" } else { "" }
	);

	let changed_label = match mode {
		WriteMode::Apply => "changed",
		WriteMode::DryRun => "would change",
	};

	let summary = run(&options, &table, |report| match report.outcome {
		FileOutcome::Changed => println!("{changed_label}: {}", report.relative.display()),
		FileOutcome::Unchanged => {}
		FileOutcome::Failed { ref reason } => {
			println!("failed: {} ({reason})", report.relative.display())
		}
	})
	.with_context(|| format!("Failed to rewrite {}", root.display()))?;

	println!();
	println!("{}", summary.summary_line());
	if !summary.failed.is_empty() {
		println!("{} files could not be processed", summary.failed.len());
	}
	println!("Run the build or type-check next to verify the rewritten imports.");

	Ok(ExitCode::SUCCESS)
}
