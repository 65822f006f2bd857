use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.timeout_secs == 0 {
		return Err(ConfigError::invalid(
			"site.timeout_secs",
			config.timeout_secs.to_string(),
			sources.source_for_timeout(),
			"must be at least 1",
		));
	}

	if config.user_agent.is_empty() {
		return Err(ConfigError::invalid(
			"site.user_agent",
			config.user_agent.clone(),
			sources.source_for_user_agent(),
			"must not be empty",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use docsearch::ui::Theme;
	use docsearch::widget::FocusPolicy;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			base_url: "/".into(),
			timeout_secs: 10,
			user_agent: "docsearch/test".into(),
			initial_query: String::new(),
			theme_name: "slate".into(),
			theme: Theme::default(),
			focus_policy: FocusPolicy::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_secs: 0,
			..config()
		};
		let sources = ConfigSources {
			site_timeout: Some(SettingSource::Environment("DOCSEARCH__SITE__TIMEOUT_SECS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "site.timeout_secs"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_blank_user_agent() {
		let config = ResolvedConfig {
			user_agent: String::new(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(err.to_string().contains("configuration key `site.user_agent`"));
	}
}
