mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use docsearch::logging::{self, LogTarget};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in docsearch::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let target = if cli.once {
		LogTarget::Stderr
	} else {
		LogTarget::cache_file()?
	};
	logging::initialize(target)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(cli.output, cli.once, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, once: bool, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let report = workflow.run(once)?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
