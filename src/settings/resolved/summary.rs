use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", summary_text(config));
}

fn summary_text(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Base URL: {}", config.base_url),
		format!("  Timeout: {}s", config.timeout_secs),
		format!("  User agent: {}", config.user_agent),
		format!("  UI theme: {}", config.theme_name),
		format!("  Open on focus: {}", config.focus_policy),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	let mut text = lines.join("\n");
	text.push('\n');
	text
}
