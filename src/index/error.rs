use std::path::PathBuf;

use thiserror::Error;

/// Reasons the search index could not be loaded.
///
/// None of these reach the end user: the loader logs them and installs the
/// fallback dataset instead.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),

	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("request to {url} returned status {status}")]
	Status { url: String, status: u16 },

	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse search index: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("search index must be an array of entries or an object with an `entries` array")]
	Shape,

	#[error("search index contained {total} entries but none had a title and url")]
	NoValidEntries { total: usize },
}

impl LoadError {
	pub fn status(url: impl Into<String>, status: u16) -> Self {
		Self::Status {
			url: url.into(),
			status,
		}
	}
}
