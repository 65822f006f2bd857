//! Transports that retrieve the raw index document.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::LoadError;

const REMOTE_PREFIXES: [&str; 2] = ["http://", "https://"];
const FILE_PREFIX: &str = "file://";

/// Settings shared by every fetcher built through [`fetcher_for`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
	pub timeout: Duration,
	pub user_agent: String,
}

impl Default for FetchOptions {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(10),
			user_agent: default_user_agent(),
		}
	}
}

/// Returns the user agent sent with index requests: `docsearch/{version}`.
pub fn default_user_agent() -> String {
	format!("docsearch/{}", env!("CARGO_PKG_VERSION"))
}

/// Retrieves the bytes stored at an index location.
#[async_trait]
pub trait IndexFetcher: Send + Sync {
	async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError>;
}

/// Fetches the index over HTTP(S). Any non-2xx response is an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
	client: Client,
}

impl HttpFetcher {
	pub fn new(options: &FetchOptions) -> Result<Self, LoadError> {
		let client = Client::builder()
			.user_agent(options.user_agent.clone())
			.timeout(options.timeout)
			.build()
			.map_err(LoadError::Client)?;
		Ok(Self { client })
	}
}

#[async_trait]
impl IndexFetcher for HttpFetcher {
	async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
		debug!(url = location, "requesting search index");
		let transport = |source: reqwest::Error| LoadError::Transport {
			url: location.to_string(),
			source,
		};

		let response = self.client.get(location).send().await.map_err(transport)?;
		let status = response.status();
		if !status.is_success() {
			return Err(LoadError::status(location, status.as_u16()));
		}

		let body = response.bytes().await.map_err(transport)?;
		Ok(body.to_vec())
	}
}

/// Reads the index from a site that was built to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFetcher;

#[async_trait]
impl IndexFetcher for FsFetcher {
	async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
		let path = PathBuf::from(location.strip_prefix(FILE_PREFIX).unwrap_or(location));
		debug!(path = %path.display(), "reading search index");
		tokio::fs::read(&path)
			.await
			.map_err(|source| LoadError::Io { path, source })
	}
}

/// Whether `base_url` points at a remote site rather than a local build.
pub fn is_remote(base_url: &str) -> bool {
	let lowered = base_url.trim_start().to_ascii_lowercase();
	REMOTE_PREFIXES
		.iter()
		.any(|prefix| lowered.starts_with(prefix))
}

/// Pick the transport matching `base_url`.
pub fn fetcher_for(
	base_url: &str,
	options: &FetchOptions,
) -> Result<Arc<dyn IndexFetcher>, LoadError> {
	if is_remote(base_url) {
		Ok(Arc::new(HttpFetcher::new(options)?))
	} else {
		Ok(Arc::new(FsFetcher))
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn remote_detection_is_a_prefix_test() {
		assert!(is_remote("https://tmc.github.io/langchaingo/"));
		assert!(is_remote("HTTP://localhost:3000/"));
		assert!(!is_remote("/langchaingo/"));
		assert!(!is_remote("file:///srv/site/"));
		assert!(!is_remote("./build/"));
	}

	#[tokio::test]
	async fn fs_fetcher_reads_plain_and_file_urls() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("search-index.json");
		fs::write(&path, b"[]").unwrap();

		let plain = FsFetcher.fetch(path.to_str().unwrap()).await.unwrap();
		let url = format!("file://{}", path.display());
		let prefixed = FsFetcher.fetch(&url).await.unwrap();

		assert_eq!(plain, b"[]");
		assert_eq!(prefixed, b"[]");
	}

	#[tokio::test]
	async fn fs_fetcher_reports_missing_files() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("search-index.json");

		let err = FsFetcher
			.fetch(missing.to_str().unwrap())
			.await
			.unwrap_err();

		assert!(matches!(err, LoadError::Io { .. }));
	}

	#[test]
	fn default_user_agent_names_the_crate() {
		assert!(default_user_agent().starts_with("docsearch/"));
	}
}
