use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FocusArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `docsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "docsearch",
	version,
	long_version = long_version(),
	about = "Search a documentation site's index from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DOCSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Site base URL or local build directory holding search-index.json (default: /)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "open-on-focus",
		value_enum,
		help = "When focusing the input reopens the results (default: query)"
	)]
	pub(crate) open_on_focus: Option<FocusArg>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Index request timeout in seconds (default: 10)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "once",
		help = "Load the index, run the query, print the results and exit (default: disabled)"
	)]
	pub(crate) once: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
