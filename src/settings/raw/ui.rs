use serde::Deserialize;

use docsearch::ui::theme::{self, DEFAULT_THEME, Theme};
use docsearch::widget::FocusPolicy;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) open_on_focus: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) initial_query: String,
	pub(super) theme_name: String,
	pub(super) theme: Theme,
	pub(super) focus_policy: FocusPolicy,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(policy) = cli.open_on_focus {
			self.open_on_focus = Some(policy.as_str().to_string());
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let theme_name = non_blank(self.theme).unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = theme::by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"ui.theme",
				theme_name.clone(),
				sources.source_for_theme(),
				format!("expected one of: {}", theme::names().join(", ")),
			)
		})?;

		let focus_policy = match non_blank(self.open_on_focus) {
			None => FocusPolicy::default(),
			Some(name) => FocusPolicy::from_name(&name).ok_or_else(|| {
				ConfigError::invalid(
					"ui.open_on_focus",
					name.clone(),
					sources.source_for_open_on_focus(),
					format!("expected one of: {}", FocusPolicy::names().join(", ")),
				)
			})?,
		};

		Ok(UiResolution {
			initial_query: self.initial_query.unwrap_or_default(),
			theme_name,
			theme,
			focus_policy,
		})
	}
}
