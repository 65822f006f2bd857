use std::time::Duration;

use docsearch::index::FetchOptions;
use docsearch::ui::Theme;
use docsearch::widget::{FocusPolicy, SearchBarOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub base_url: String,
	pub timeout_secs: u64,
	pub user_agent: String,
	pub initial_query: String,
	pub theme_name: String,
	pub theme: Theme,
	pub focus_policy: FocusPolicy,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn fetch_options(&self) -> FetchOptions {
		FetchOptions {
			timeout: Duration::from_secs(self.timeout_secs),
			user_agent: self.user_agent.clone(),
		}
	}

	pub fn search_bar_options(&self) -> SearchBarOptions {
		SearchBarOptions::new(self.base_url.clone())
			.with_focus_policy(self.focus_policy)
			.with_initial_query(self.initial_query.clone())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
