use std::sync::Arc;
use std::sync::mpsc::Sender;

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::fetch::{FetchOptions, IndexFetcher, fetcher_for};
use super::{IndexMeta, LoadError, SearchEntry, fallback_entries};

/// File name of the flat index published next to the site's pages.
pub const INDEX_FILE_NAME: &str = "search-index.json";

/// Location of the index for a site served from `base_url`.
///
/// An empty base URL means the site root, and a missing trailing slash is
/// added so the file name is always appended as a path segment.
pub fn index_url(base_url: &str) -> String {
	let base = base_url.trim();
	if base.is_empty() {
		return format!("/{INDEX_FILE_NAME}");
	}
	if base.ends_with('/') {
		format!("{base}{INDEX_FILE_NAME}")
	} else {
		format!("{base}/{INDEX_FILE_NAME}")
	}
}

/// Where the active index came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrigin {
	Remote,
	Fallback,
}

/// A ready-to-search index. Entries are shared and never mutated.
#[derive(Debug, Clone)]
pub struct LoadedIndex {
	pub entries: Arc<[SearchEntry]>,
	pub origin: IndexOrigin,
	pub meta: Option<IndexMeta>,
}

impl LoadedIndex {
	pub fn remote(entries: Vec<SearchEntry>, meta: Option<IndexMeta>) -> Self {
		Self {
			entries: entries.into(),
			origin: IndexOrigin::Remote,
			meta,
		}
	}

	pub fn fallback() -> Self {
		Self {
			entries: fallback_entries().into(),
			origin: IndexOrigin::Fallback,
			meta: None,
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Completed load tagged with the generation that requested it.
#[derive(Debug, Clone)]
pub struct IndexUpdate {
	pub generation: u64,
	pub index: LoadedIndex,
}

/// Parse either index document shape: a flat array of entries, or the
/// generator's `{"entries": [...], "meta": {...}}` wrapper.
///
/// Entries without a title or url are dropped. A non-empty document where
/// every entry is dropped is an error.
pub fn parse_index(bytes: &[u8]) -> Result<LoadedIndex, LoadError> {
	let document: Value = serde_json::from_slice(bytes)?;
	let (raw_entries, meta) = match document {
		Value::Array(_) => (document, None),
		Value::Object(mut object) => {
			let entries = object.remove("entries").ok_or(LoadError::Shape)?;
			let meta = match object.remove("meta") {
				Some(Value::Null) | None => None,
				Some(meta) => Some(serde_json::from_value::<IndexMeta>(meta)?),
			};
			(entries, meta)
		}
		_ => return Err(LoadError::Shape),
	};
	if !raw_entries.is_array() {
		return Err(LoadError::Shape);
	}

	let parsed: Vec<SearchEntry> = serde_json::from_value(raw_entries)?;
	let total = parsed.len();
	let entries: Vec<SearchEntry> = parsed.into_iter().filter(SearchEntry::is_valid).collect();

	let dropped = total - entries.len();
	if dropped > 0 {
		if entries.is_empty() {
			return Err(LoadError::NoValidEntries { total });
		}
		warn!(dropped, total, "ignoring search index entries without a title or url");
	}

	Ok(LoadedIndex::remote(entries, meta))
}

/// Performs the single load attempt for one mount of the search bar.
pub struct IndexLoader {
	base_url: String,
	fetcher: Arc<dyn IndexFetcher>,
}

impl IndexLoader {
	pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn IndexFetcher>) -> Self {
		Self {
			base_url: base_url.into(),
			fetcher,
		}
	}

	pub fn url(&self) -> String {
		index_url(&self.base_url)
	}

	/// Fetch and parse the index, surfacing any failure.
	pub async fn try_load(&self) -> Result<LoadedIndex, LoadError> {
		let bytes = self.fetcher.fetch(&self.url()).await?;
		parse_index(&bytes)
	}

	/// Fetch and parse the index, substituting the fallback dataset on any
	/// failure. Never retries.
	pub async fn load(&self) -> LoadedIndex {
		match self.try_load().await {
			Ok(index) => {
				match &index.meta {
					Some(meta) => info!(
						entries = index.len(),
						docs = meta.doc_count,
						symbols = meta.symbol_count,
						generated = %meta.generated,
						"loaded search index"
					),
					None => info!(entries = index.len(), "loaded search index"),
				}
				index
			}
			Err(err) => {
				warn!(url = %self.url(), error = %err, "search index not available, using fallback pages");
				LoadedIndex::fallback()
			}
		}
	}

	/// Run [`IndexLoader::load`] on `runtime` and deliver the result to
	/// `updates`. A closed receiver means the widget went away; the result is
	/// dropped.
	pub fn spawn(self, runtime: &Handle, generation: u64, updates: Sender<IndexUpdate>) -> JoinHandle<()> {
		runtime.spawn(async move {
			let index = self.load().await;
			if updates.send(IndexUpdate { generation, index }).is_err() {
				debug!(generation, "search bar unmounted before the index arrived");
			}
		})
	}
}

/// Starts index loads on behalf of the search bar.
///
/// Implementations must deliver exactly one [`IndexUpdate`] per request,
/// tagged with the requested generation, unless the receiver is gone.
pub trait IndexProvider {
	fn request(&self, base_url: &str, generation: u64, updates: Sender<IndexUpdate>);
}

/// Loads indexes on a tokio runtime using the transport matching each base URL.
#[derive(Debug, Clone)]
pub struct TokioIndexProvider {
	runtime: Handle,
	options: FetchOptions,
}

impl TokioIndexProvider {
	pub fn new(runtime: Handle, options: FetchOptions) -> Self {
		Self { runtime, options }
	}
}

impl IndexProvider for TokioIndexProvider {
	fn request(&self, base_url: &str, generation: u64, updates: Sender<IndexUpdate>) {
		match fetcher_for(base_url, &self.options) {
			Ok(fetcher) => {
				IndexLoader::new(base_url, fetcher).spawn(&self.runtime, generation, updates);
			}
			Err(err) => {
				warn!(error = %err, "search index transport unavailable, using fallback pages");
				let update = IndexUpdate {
					generation,
					index: LoadedIndex::fallback(),
				};
				if updates.send(update).is_err() {
					debug!(generation, "search bar unmounted before the index arrived");
				}
			}
		}
	}
}

#[cfg(test)]
mod tests;
