//! Routing a selected result either within the site or out to a browser.

use serde::Serialize;
use tracing::debug;

// Only web URLs leave the site. Other schemes such as `mailto:` or `ftp://`
// are routed in-app like any relative path.
const EXTERNAL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Where selecting a result leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum Navigation {
	/// In-site path, handled without leaving the application.
	Route(String),
	/// Absolute URL opened in a new browsing context.
	External(String),
}

impl Navigation {
	/// Classify `url` by its scheme prefix.
	///
	/// Only `http://` and `https://` (in any casing) count as external; there
	/// is no host allowlist, so an absolute URL back to the same site still
	/// opens externally.
	pub fn for_url(url: impl Into<String>) -> Self {
		let url = url.into();
		if is_external(&url) {
			Self::External(url)
		} else {
			Self::Route(url)
		}
	}

	pub fn target(&self) -> &str {
		match self {
			Self::Route(target) | Self::External(target) => target,
		}
	}

	pub fn is_external(&self) -> bool {
		matches!(self, Self::External(_))
	}

	/// Hand this navigation to `navigator`.
	pub fn dispatch<N: Navigator + ?Sized>(&self, navigator: &mut N) {
		debug!(target = self.target(), external = self.is_external(), "dispatching navigation");
		match self {
			Self::Route(path) => navigator.push(path),
			Self::External(url) => navigator.open_external(url),
		}
	}
}

fn is_external(url: &str) -> bool {
	EXTERNAL_PREFIXES.iter().any(|prefix| {
		url.get(..prefix.len())
			.is_some_and(|head| head.eq_ignore_ascii_case(prefix))
	})
}

/// Capability the search bar uses to act on a selection.
pub trait Navigator {
	/// In-app route transition.
	fn push(&mut self, path: &str);
	/// Open `url` outside the application.
	fn open_external(&mut self, url: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
	fn push(&mut self, path: &str) {
		(**self).push(path);
	}

	fn open_external(&mut self, url: &str) {
		(**self).open_external(url);
	}
}

/// Navigator that only remembers what it was asked to do.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
	visited: Vec<Navigation>,
}

impl NavigationHistory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn visited(&self) -> &[Navigation] {
		&self.visited
	}

	pub fn last(&self) -> Option<&Navigation> {
		self.visited.last()
	}

	pub fn record(&mut self, navigation: Navigation) {
		self.visited.push(navigation);
	}
}

impl Navigator for NavigationHistory {
	fn push(&mut self, path: &str) {
		self.record(Navigation::Route(path.to_string()));
	}

	fn open_external(&mut self, url: &str) {
		self.record(Navigation::External(url.to_string()));
	}
}
