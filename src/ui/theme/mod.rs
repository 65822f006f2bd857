mod light;
mod slate;
mod solarized;

use ratatui::style::Style;

pub use light::LIGHT;
pub use slate::SLATE;
pub use solarized::SOLARIZED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Input and panel borders, status line.
	pub header: Style,
	/// Active result row.
	pub row_highlight: Style,
	/// Query text and result titles.
	pub prompt: Style,
	/// Placeholder, snippets and the no-results message.
	pub empty: Style,
	/// Emphasized snippet spans.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

pub const DEFAULT_THEME: &str = slate::NAME;

const BUILT_IN: [(&str, Theme); 3] = [
	(light::NAME, LIGHT),
	(slate::NAME, SLATE),
	(solarized::NAME, SOLARIZED),
];

/// Lookup a Theme by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILT_IN
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, theme)| *theme)
}

/// Return the theme names known to the UI, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|(name, _)| *name).collect()
}
