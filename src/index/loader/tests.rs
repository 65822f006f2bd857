use std::sync::mpsc;
use std::time::Duration;

use async_trait::async_trait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::index::HttpFetcher;

struct RejectingFetcher;

#[async_trait]
impl IndexFetcher for RejectingFetcher {
	async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
		Err(LoadError::status(location, 503))
	}
}

struct StaticFetcher(&'static str);

#[async_trait]
impl IndexFetcher for StaticFetcher {
	async fn fetch(&self, _location: &str) -> Result<Vec<u8>, LoadError> {
		Ok(self.0.as_bytes().to_vec())
	}
}

fn http_loader(base_url: &str) -> IndexLoader {
	let fetcher = HttpFetcher::new(&FetchOptions::default()).expect("client");
	IndexLoader::new(base_url, Arc::new(fetcher))
}

#[test]
fn index_url_appends_the_file_name() {
	assert_eq!(index_url("/langchaingo/"), "/langchaingo/search-index.json");
	assert_eq!(index_url("/langchaingo"), "/langchaingo/search-index.json");
	assert_eq!(index_url(""), "/search-index.json");
	assert_eq!(index_url("/"), "/search-index.json");
	assert_eq!(
		index_url("https://tmc.github.io/langchaingo/"),
		"https://tmc.github.io/langchaingo/search-index.json"
	);
}

#[test]
fn parse_accepts_flat_arrays() {
	let index = parse_index(br#"[{"title": "Agents", "url": "/docs/modules/agents/"}]"#)
		.expect("index");

	assert_eq!(index.origin, IndexOrigin::Remote);
	assert_eq!(index.len(), 1);
	assert!(index.meta.is_none());
}

#[test]
fn parse_accepts_wrapped_documents() {
	let index = parse_index(
		br#"{
			"entries": [{"title": "Agents", "url": "/docs/modules/agents/"}],
			"meta": {"generated": "1", "docCount": 1, "symbolCount": 0, "version": "1.0"}
		}"#,
	)
	.expect("index");

	assert_eq!(index.len(), 1);
	assert_eq!(index.meta.map(|meta| meta.version), Some("1.0".to_string()));
}

#[test]
fn parse_rejects_other_shapes() {
	assert!(matches!(parse_index(b"42"), Err(LoadError::Shape)));
	assert!(matches!(parse_index(br#"{"docs": []}"#), Err(LoadError::Shape)));
	assert!(matches!(parse_index(br#"{"entries": {}}"#), Err(LoadError::Shape)));
	assert!(matches!(parse_index(b"not json"), Err(LoadError::Parse(_))));
}

#[test]
fn parse_drops_invalid_entries() {
	let index = parse_index(br#"[{"title": "", "url": "/a"}, {"title": "B", "url": "/b"}]"#)
		.expect("index");
	assert_eq!(index.len(), 1);
	assert_eq!(index.entries[0].title, "B");

	let err = parse_index(br#"[{"title": " ", "url": "/a"}]"#).unwrap_err();
	assert!(matches!(err, LoadError::NoValidEntries { total: 1 }));
}

#[test]
fn parse_keeps_an_empty_index() {
	let index = parse_index(b"[]").expect("index");
	assert!(index.is_empty());
	assert_eq!(index.origin, IndexOrigin::Remote);
}

#[tokio::test]
async fn http_load_installs_the_served_index() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/langchaingo/search-index.json"))
		.respond_with(ResponseTemplate::new(200).set_body_string(
			r#"[{"title": "Agents", "url": "/docs/modules/agents/", "content": "Agent functionality"}]"#,
		))
		.expect(1)
		.mount(&server)
		.await;

	let loader = http_loader(&format!("{}/langchaingo/", server.uri()));
	let index = loader.load().await;

	assert_eq!(index.origin, IndexOrigin::Remote);
	assert_eq!(index.entries[0].title, "Agents");
}

#[tokio::test]
async fn non_success_status_falls_back() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search-index.json"))
		.respond_with(ResponseTemplate::new(404))
		.mount(&server)
		.await;

	let loader = http_loader(&format!("{}/", server.uri()));

	let err = loader.try_load().await.unwrap_err();
	assert!(matches!(err, LoadError::Status { status: 404, .. }));

	let index = loader.load().await;
	assert_eq!(index.origin, IndexOrigin::Fallback);
	assert_eq!(index.len(), fallback_entries().len());
}

#[tokio::test]
async fn malformed_body_falls_back() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search-index.json"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>not found</html>"))
		.mount(&server)
		.await;

	let index = http_loader(&server.uri()).load().await;

	assert_eq!(index.origin, IndexOrigin::Fallback);
}

#[tokio::test]
async fn rejected_fetch_falls_back() {
	let loader = IndexLoader::new("/", Arc::new(RejectingFetcher));
	let index = loader.load().await;

	assert_eq!(index.origin, IndexOrigin::Fallback);
	assert!(index.entries.iter().any(|entry| entry.title == "Memory"));
}

#[tokio::test]
async fn spawned_load_reports_its_generation() {
	let (tx, rx) = mpsc::channel();
	let loader = IndexLoader::new("/", Arc::new(StaticFetcher(r#"[{"title": "A", "url": "/a"}]"#)));

	loader
		.spawn(&Handle::current(), 7, tx)
		.await
		.expect("task");

	let update = rx.recv_timeout(Duration::from_secs(1)).expect("update");
	assert_eq!(update.generation, 7);
	assert_eq!(update.index.len(), 1);
}

#[tokio::test]
async fn spawned_load_tolerates_a_dropped_receiver() {
	let (tx, rx) = mpsc::channel();
	drop(rx);

	let loader = IndexLoader::new("/", Arc::new(StaticFetcher("[]")));
	loader
		.spawn(&Handle::current(), 1, tx)
		.await
		.expect("task completes without panicking");
}

#[tokio::test(flavor = "multi_thread")]
async fn tokio_provider_reads_local_builds() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(
		dir.path().join(INDEX_FILE_NAME),
		r#"[{"title": "Chains", "url": "/docs/modules/chains/"}]"#,
	)
	.unwrap();

	let provider = TokioIndexProvider::new(Handle::current(), FetchOptions::default());
	let (tx, rx) = mpsc::channel();
	provider.request(dir.path().to_str().unwrap(), 3, tx);

	let update = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
		.await
		.expect("join")
		.expect("update");
	assert_eq!(update.generation, 3);
	assert_eq!(update.index.origin, IndexOrigin::Remote);
	assert_eq!(update.index.entries[0].title, "Chains");
}

#[tokio::test(flavor = "multi_thread")]
async fn unusable_transport_answers_with_fallback_pages() {
	let options = FetchOptions {
		user_agent: "docsearch\nbroken".into(),
		..FetchOptions::default()
	};
	let provider = TokioIndexProvider::new(Handle::current(), options);

	let (tx, rx) = mpsc::channel();
	provider.request("https://tmc.github.io/langchaingo/", 4, tx);
	let update = rx.try_recv().expect("update");
	assert_eq!(update.generation, 4);
	assert_eq!(update.index.origin, IndexOrigin::Fallback);

	let (tx, rx) = mpsc::channel();
	drop(rx);
	provider.request("https://tmc.github.io/langchaingo/", 5, tx);
}
