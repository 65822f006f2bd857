use serde::Serialize;

use super::fold::fold;
use super::{Snippet, highlight_entry};
use crate::index::SearchEntry;

/// Queries shorter than this many characters are not searched.
pub const MIN_QUERY_LEN: usize = 2;

/// Upper bound on the number of results returned for one query.
pub const MAX_RESULTS: usize = 8;

/// An index entry selected for a query, with the excerpt to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
	#[serde(flatten)]
	pub entry: SearchEntry,
	pub highlight: Option<Snippet>,
}

impl SearchResult {
	pub fn new(entry: SearchEntry, highlight: Option<Snippet>) -> Self {
		Self { entry, highlight }
	}

	/// The highlight, or the entry's plain content when nothing is highlighted.
	pub fn display_snippet(&self) -> Option<Snippet> {
		self.highlight
			.clone()
			.or_else(|| self.entry.content().map(Snippet::plain))
	}
}

/// Whether `query` is long enough to be searched.
pub fn is_searchable(query: &str) -> bool {
	query.chars().count() >= MIN_QUERY_LEN
}

/// Whether `entry` contains `query` in any searchable field, ignoring case.
///
/// Searchable fields are the title, content, `package.title`, every keyword
/// and the signature.
pub fn matches_query(entry: &SearchEntry, query: &str) -> bool {
	matches_folded(entry, &fold(query))
}

fn matches_folded(entry: &SearchEntry, needle: &str) -> bool {
	let contains = |text: &str| fold(text).contains(needle);

	contains(entry.title.as_str())
		|| entry.content().is_some_and(contains)
		|| entry
			.qualified_title()
			.is_some_and(|qualified| contains(qualified.as_str()))
		|| entry.keywords().iter().any(|keyword| contains(keyword.as_str()))
		|| entry.signature().is_some_and(contains)
}

/// Run `query` against the index.
///
/// Entries are kept in index order with no re-ranking, truncated to
/// [`MAX_RESULTS`], and each is decorated with its highlight.
pub fn search(entries: &[SearchEntry], query: &str) -> Vec<SearchResult> {
	if !is_searchable(query) {
		return Vec::new();
	}

	let needle = fold(query);
	entries
		.iter()
		.filter(|entry| matches_folded(entry, &needle))
		.take(MAX_RESULTS)
		.map(|entry| SearchResult::new(entry.clone(), highlight_entry(entry, query)))
		.collect()
}
