use tracing::{debug, warn};

use crate::navigation::{Navigation, Navigator};

/// Navigator for the terminal front-end.
///
/// There is no page to transition to, so routes are only recorded and shown
/// in the status line. External URLs go to the system browser.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
	visited: Vec<Navigation>,
	launch_browser: bool,
}

impl TerminalNavigator {
	pub fn new() -> Self {
		Self {
			visited: Vec::new(),
			launch_browser: true,
		}
	}

	/// Record external URLs without opening them.
	pub fn without_browser() -> Self {
		Self::default()
	}

	pub fn visited(&self) -> &[Navigation] {
		&self.visited
	}

	pub fn last(&self) -> Option<&Navigation> {
		self.visited.last()
	}
}

impl Navigator for TerminalNavigator {
	fn push(&mut self, path: &str) {
		debug!(path, "route selected");
		self.visited.push(Navigation::Route(path.to_string()));
	}

	fn open_external(&mut self, url: &str) {
		self.visited.push(Navigation::External(url.to_string()));
		if !self.launch_browser {
			return;
		}
		if let Err(err) = webbrowser::open(url) {
			warn!(url, error = %err, "failed to open browser");
		}
	}
}
