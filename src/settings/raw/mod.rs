use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod site;
mod ui;

use site::SiteSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	site: SiteSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.site.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			site_timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.site.timeout_secs.is_some(),
				"DOCSEARCH__SITE__TIMEOUT_SECS",
				"--timeout",
				"site.timeout_secs",
			),
			site_user_agent: detect_source(
				false,
				self.site.user_agent.is_some(),
				"DOCSEARCH__SITE__USER_AGENT",
				"",
				"site.user_agent",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"DOCSEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			ui_open_on_focus: detect_source(
				cli.open_on_focus.is_some(),
				self.ui.open_on_focus.is_some(),
				"DOCSEARCH__UI__OPEN_ON_FOCUS",
				"--open-on-focus",
				"ui.open_on_focus",
			),
		};

		let site = self.site.finalize();
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			base_url: site.base_url,
			timeout_secs: site.timeout_secs,
			user_agent: site.user_agent,
			initial_query: ui.initial_query,
			theme_name: ui.theme_name,
			theme: ui.theme,
			focus_policy: ui.focus_policy,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
