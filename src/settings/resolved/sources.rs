use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) site_timeout: Option<SettingSource>,
	pub(crate) site_user_agent: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_open_on_focus: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.site_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("site.timeout_secs"))
	}

	pub(crate) fn source_for_user_agent(&self) -> SettingSource {
		self.site_user_agent
			.clone()
			.unwrap_or(SettingSource::ConfigKey("site.user_agent"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_open_on_focus(&self) -> SettingSource {
		self.ui_open_on_focus
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.open_on_focus"))
	}
}
