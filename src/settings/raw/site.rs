use serde::Deserialize;

use docsearch::index::{FetchOptions, default_user_agent};

use super::super::util::non_blank;
use crate::cli::CliArgs;

pub(super) const DEFAULT_BASE_URL: &str = "/";

/// Site related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SiteSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	pub(super) user_agent: Option<String>,
}

pub(super) struct SiteResolution {
	pub(super) base_url: String,
	pub(super) timeout_secs: u64,
	pub(super) user_agent: String,
}

impl SiteSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(base_url) = cli.base_url.clone() {
			self.base_url = Some(base_url);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> SiteResolution {
		let defaults = FetchOptions::default();
		SiteResolution {
			base_url: non_blank(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout.as_secs()),
			user_agent: self
				.user_agent
				.map(|agent| agent.trim().to_string())
				.unwrap_or_else(default_user_agent),
		}
	}
}
