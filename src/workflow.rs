use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use tracing::{info, warn};

use docsearch::index::{IndexOrigin, TokioIndexProvider, fallback_entries};
use docsearch::navigation::Navigator;
use docsearch::search::{SearchResult, is_searchable, search};
use docsearch::widget::SearchBar;
use docsearch::{App, SessionOutcome, TerminalNavigator};

use crate::settings::ResolvedConfig;

const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(10);
const LOAD_GRACE: Duration = Duration::from_secs(1);

/// What a run produced, ready for printing.
#[derive(Debug)]
pub(crate) enum Report {
	Session(SessionOutcome),
	Once(OnceReport),
}

/// Results of a single non-interactive query.
#[derive(Debug)]
pub(crate) struct OnceReport {
	pub(crate) query: String,
	pub(crate) origin: IndexOrigin,
	pub(crate) results: Vec<SearchResult>,
}

impl OnceReport {
	pub(crate) fn searchable(&self) -> bool {
		is_searchable(&self.query)
	}
}

/// When a one-shot run stops waiting for the index. `None` means the timeout
/// is too large to represent, so the run waits for the load to finish.
fn load_deadline(now: Instant, timeout: Duration) -> Option<Instant> {
	now.checked_add(timeout.saturating_add(LOAD_GRACE))
}

/// Owns the runtime index loads run on and drives either front-end.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	runtime: Runtime,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let runtime = Builder::new_multi_thread()
			.worker_threads(1)
			.enable_all()
			.build()
			.context("failed to start the async runtime")?;
		Ok(Self { config, runtime })
	}

	pub(crate) fn run(self, once: bool) -> Result<Report> {
		if once {
			Ok(Report::Once(self.run_once()))
		} else {
			self.run_interactive().map(Report::Session)
		}
	}

	fn mount<N: Navigator>(&self, navigator: N) -> SearchBar<N> {
		let provider = TokioIndexProvider::new(self.runtime.handle().clone(), self.config.fetch_options());
		SearchBar::mount(self.config.search_bar_options(), navigator, Box::new(provider))
	}

	fn run_interactive(self) -> Result<SessionOutcome> {
		let bar = self.mount(TerminalNavigator::new());
		App::new(bar, self.config.theme).run()
	}

	/// Wait for the index, then search it once.
	fn run_once(self) -> OnceReport {
		let mut bar = self.mount(TerminalNavigator::without_browser());
		let deadline = load_deadline(Instant::now(), self.config.fetch_options().timeout);
		while bar.is_loading() && deadline.is_none_or(|deadline| Instant::now() < deadline) {
			if !bar.pump_index_updates() {
				thread::sleep(LOAD_POLL_INTERVAL);
			}
		}

		let query = self.config.initial_query.clone();
		let report = if bar.is_loading() {
			warn!(site = bar.base_url(), "search index did not arrive in time, using fallback pages");
			OnceReport {
				results: search(&fallback_entries(), &query),
				query,
				origin: IndexOrigin::Fallback,
			}
		} else {
			bar.on_input(query.clone());
			OnceReport {
				query,
				origin: bar.index_origin().unwrap_or(IndexOrigin::Fallback),
				results: bar.results().to_vec(),
			}
		};
		info!(query = %report.query, results = report.results.len(), "one-shot search finished");
		report
	}
}
