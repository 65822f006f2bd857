//! Loading the documentation search index.
//!
//! The index is fetched once per mount of the search bar, from
//! `{base_url}search-index.json`. Any failure is logged and replaced by a
//! small built-in dataset so search keeps working with reduced coverage.

mod entry;
mod error;
mod fallback;
pub mod fetch;
mod loader;

pub use entry::{IndexMeta, SearchEntry};
pub use error::LoadError;
pub use fallback::fallback_entries;
pub use fetch::{
	FetchOptions, FsFetcher, HttpFetcher, IndexFetcher, default_user_agent, fetcher_for,
};
pub use loader::{
	INDEX_FILE_NAME, IndexLoader, IndexOrigin, IndexProvider, IndexUpdate, LoadedIndex,
	TokioIndexProvider, index_url, parse_index,
};
