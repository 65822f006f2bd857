//! Tracing subscriber setup.
//!
//! The interactive UI owns the terminal, so its logs go to a file in the cache
//! directory. One-shot mode logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "DOCSEARCH_LOG";
pub const LOG_FILE_NAME: &str = "docsearch.log";
const DEFAULT_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

impl LogTarget {
	/// `docsearch.log` under the cache directory.
	pub fn cache_file() -> Result<Self> {
		Ok(Self::File(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME)))
	}
}

fn filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber.
pub fn initialize(target: LogTarget) -> Result<()> {
	let registry = tracing_subscriber::registry().with(filter());
	let installed = match target {
		LogTarget::Stderr => registry
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.try_init(),
		LogTarget::File(path) => {
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent)
					.with_context(|| format!("failed to create log directory {}", parent.display()))?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(&path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			registry
				.with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
				.try_init()
		}
	};
	installed.map_err(|err| anyhow!("failed to install logger: {err}"))
}
