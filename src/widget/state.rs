use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::debug;

use super::view::{SearchBarView, project};
use crate::index::{IndexOrigin, IndexProvider, IndexUpdate, LoadedIndex};
use crate::navigation::{Navigation, Navigator};
use crate::search::{SearchResult, is_searchable, search};

/// When gaining focus reopens the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusPolicy {
	/// Only when the current query is long enough to be searched.
	#[default]
	QueryReady,
	/// On every focus.
	Always,
}

impl FocusPolicy {
	pub const ALL: [Self; 2] = [Self::QueryReady, Self::Always];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::QueryReady => "query",
			Self::Always => "always",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim();
		Self::ALL
			.into_iter()
			.find(|policy| policy.as_str().eq_ignore_ascii_case(name))
	}

	pub fn names() -> Vec<&'static str> {
		Self::ALL.into_iter().map(Self::as_str).collect()
	}
}

impl fmt::Display for FocusPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Keys the search bar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Escape,
	Up,
	Down,
	Enter,
}

/// Where a pointer press landed relative to the input and its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
	Inside,
	Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
	Closed,
	/// Open with a query too short to search.
	OpenEmpty,
	OpenResults,
	/// Open, searchable query, zero results.
	OpenNoMatch,
}

#[derive(Debug, Clone, Default)]
pub struct SearchBarOptions {
	pub base_url: String,
	pub focus_policy: FocusPolicy,
	pub initial_query: String,
}

impl SearchBarOptions {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Self::default()
		}
	}

	pub fn with_focus_policy(mut self, focus_policy: FocusPolicy) -> Self {
		self.focus_policy = focus_policy;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}
}

/// Search bar state.
///
/// Each index request is tagged with a generation. Only the update matching
/// the latest generation is installed, so a slow response for an old base URL
/// never replaces a newer one. Dropping the bar drops the receiving end of the
/// update channel and late loads are discarded by the sender.
pub struct SearchBar<N> {
	query: String,
	results: Vec<SearchResult>,
	open: bool,
	active: usize,
	index: Option<LoadedIndex>,
	base_url: String,
	generation: u64,
	installed: Option<u64>,
	focus_policy: FocusPolicy,
	navigator: N,
	provider: Box<dyn IndexProvider>,
	updates_tx: Sender<IndexUpdate>,
	updates: Receiver<IndexUpdate>,
}

impl<N: Navigator> SearchBar<N> {
	/// Create the bar and request the index for the configured base URL.
	pub fn mount(
		options: SearchBarOptions,
		navigator: N,
		provider: Box<dyn IndexProvider>,
	) -> Self {
		let (updates_tx, updates) = mpsc::channel();
		let mut bar = Self {
			query: options.initial_query,
			results: Vec::new(),
			open: false,
			active: 0,
			index: None,
			base_url: options.base_url,
			generation: 0,
			installed: None,
			focus_policy: options.focus_policy,
			navigator,
			provider,
			updates_tx,
			updates,
		};
		bar.request_index();
		bar
	}

	fn request_index(&mut self) {
		self.generation += 1;
		debug!(base_url = %self.base_url, generation = self.generation, "requesting search index");
		self.provider
			.request(&self.base_url, self.generation, self.updates_tx.clone());
	}

	fn refresh_results(&mut self) {
		self.results = match &self.index {
			Some(index) => search(&index.entries, &self.query),
			None => Vec::new(),
		};
		self.active = 0;
	}

	fn reset(&mut self) {
		self.query.clear();
		self.results.clear();
		self.active = 0;
		self.open = false;
	}

	pub fn on_input(&mut self, text: impl Into<String>) {
		self.query = text.into();
		self.refresh_results();
		self.open = true;
	}

	pub fn on_focus(&mut self) {
		let reopen = match self.focus_policy {
			FocusPolicy::QueryReady => is_searchable(&self.query),
			FocusPolicy::Always => true,
		};
		if reopen {
			self.open = true;
		}
	}

	/// Handle a key press. Returns the navigation performed, if any.
	pub fn on_key(&mut self, key: Key) -> Option<Navigation> {
		match key {
			Key::Escape => {
				self.reset();
				None
			}
			Key::Down => {
				if self.open && self.active + 1 < self.results.len() {
					self.active += 1;
				}
				None
			}
			Key::Up => {
				if self.open {
					self.active = self.active.saturating_sub(1);
				}
				None
			}
			Key::Enter => self.select(self.active),
		}
	}

	/// Close on presses outside the bar. Query and results survive so the
	/// next focus can show them again.
	pub fn on_pointer_down(&mut self, target: PointerTarget) {
		if target == PointerTarget::Outside {
			self.open = false;
		}
	}

	/// Navigate to result `row`, then clear the query and close.
	///
	/// Does nothing while the panel is closed or when the row does not exist.
	pub fn select(&mut self, row: usize) -> Option<Navigation> {
		if !self.open {
			return None;
		}
		let result = self.results.get(row)?;
		let navigation = Navigation::for_url(result.entry.url.clone());
		navigation.dispatch(&mut self.navigator);
		self.reset();
		Some(navigation)
	}

	/// Point the bar at another site. A changed value triggers a new load
	/// and invalidates any load still in flight.
	pub fn set_base_url(&mut self, base_url: impl Into<String>) {
		let base_url = base_url.into();
		if base_url == self.base_url {
			return;
		}
		self.base_url = base_url;
		self.request_index();
	}

	/// Install completed index loads. Returns whether the index changed.
	pub fn pump_index_updates(&mut self) -> bool {
		let mut installed = false;
		loop {
			match self.updates.try_recv() {
				Ok(update) if update.generation == self.generation => {
					debug!(
						generation = update.generation,
						entries = update.index.len(),
						"installing search index"
					);
					self.index = Some(update.index);
					self.installed = Some(update.generation);
					installed = true;
				}
				Ok(update) => {
					debug!(
						generation = update.generation,
						current = self.generation,
						"discarding stale search index"
					);
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		if installed {
			let active = self.active;
			self.refresh_results();
			if active < self.results.len() {
				self.active = active;
			}
		}
		installed
	}

	/// Whether the latest requested index has not arrived yet.
	pub fn is_loading(&self) -> bool {
		self.installed != Some(self.generation)
	}

	pub fn panel_state(&self) -> PanelState {
		if !self.open {
			PanelState::Closed
		} else if !is_searchable(&self.query) {
			PanelState::OpenEmpty
		} else if self.results.is_empty() {
			PanelState::OpenNoMatch
		} else {
			PanelState::OpenResults
		}
	}

	pub fn view(&self) -> SearchBarView {
		project(&self.query, self.panel_state(), &self.results, self.active)
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn results(&self) -> &[SearchResult] {
		&self.results
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn active(&self) -> usize {
		self.active
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	#[cfg(test)]
	pub(crate) fn generation(&self) -> u64 {
		self.generation
	}

	pub fn index_origin(&self) -> Option<IndexOrigin> {
		self.index.as_ref().map(|index| index.origin)
	}

	pub fn index(&self) -> Option<&LoadedIndex> {
		self.index.as_ref()
	}

	pub fn navigator(&self) -> &N {
		&self.navigator
	}
}

impl<N: fmt::Debug> fmt::Debug for SearchBar<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchBar")
			.field("query", &self.query)
			.field("results", &self.results.len())
			.field("open", &self.open)
			.field("active", &self.active)
			.field("base_url", &self.base_url)
			.field("generation", &self.generation)
			.field("installed", &self.installed)
			.field("navigator", &self.navigator)
			.finish_non_exhaustive()
	}
}
