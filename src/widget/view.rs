use serde::Serialize;

use super::PanelState;
use crate::search::{SearchResult, Snippet};

pub const PLACEHOLDER: &str = "Search docs...";
pub const INPUT_LABEL: &str = "Search";
/// Marker appended to titles of results that open outside the site.
pub const EXTERNAL_GLYPH: &str = "↗";

pub fn no_results_message(query: &str) -> String {
	format!("No results found for \"{query}\"")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
	pub value: String,
	pub placeholder: &'static str,
	pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
	pub package: Option<String>,
	pub title: String,
	pub external: bool,
	pub snippet: Option<Snippet>,
	pub url: String,
}

impl ResultRow {
	fn from_result(result: &SearchResult) -> Self {
		Self {
			package: result.entry.package().map(str::to_string),
			title: result.entry.title.clone(),
			external: result.entry.external,
			snippet: result.display_snippet(),
			url: result.entry.url.clone(),
		}
	}

	/// Title line as displayed: optional `package.` prefix and external glyph.
	pub fn heading(&self) -> String {
		let mut heading = match &self.package {
			Some(package) => format!("{package}.{}", self.title),
			None => self.title.clone(),
		};
		if self.external {
			heading.push(' ');
			heading.push_str(EXTERNAL_GLYPH);
		}
		heading
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelView {
	Results { rows: Vec<ResultRow>, active: usize },
	NoMatch { message: String },
}

/// Everything a front-end needs to draw the search bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarView {
	pub input: InputView,
	/// `None` while the panel is closed or the query is too short.
	pub panel: Option<PanelView>,
}

impl SearchBarView {
	pub fn rows(&self) -> &[ResultRow] {
		match &self.panel {
			Some(PanelView::Results { rows, .. }) => rows,
			_ => &[],
		}
	}

	pub fn no_match_message(&self) -> Option<&str> {
		match &self.panel {
			Some(PanelView::NoMatch { message }) => Some(message),
			_ => None,
		}
	}
}

pub(super) fn project(
	query: &str,
	state: PanelState,
	results: &[SearchResult],
	active: usize,
) -> SearchBarView {
	let panel = match state {
		PanelState::Closed | PanelState::OpenEmpty => None,
		PanelState::OpenResults => Some(PanelView::Results {
			rows: results.iter().map(ResultRow::from_result).collect(),
			active,
		}),
		PanelState::OpenNoMatch => Some(PanelView::NoMatch {
			message: no_results_message(query),
		}),
	};

	SearchBarView {
		input: InputView {
			value: query.to_string(),
			placeholder: PLACEHOLDER,
			label: INPUT_LABEL,
		},
		panel,
	}
}
