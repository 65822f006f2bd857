use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	header: Style::new().fg(Color::Rgb(148, 163, 184)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
};
