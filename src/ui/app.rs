use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::navigator::TerminalNavigator;
use super::theme::Theme;
use crate::navigation::Navigation;
use crate::widget::SearchBar;

/// Screen areas from the last draw, used to hit-test mouse presses.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Regions {
	pub(crate) input: Rect,
	pub(crate) panel: Option<Rect>,
	/// Inner area of the results list, when results are shown.
	pub(crate) rows: Option<Rect>,
}

/// What the session did, reported once the UI exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	pub query: String,
	pub visited: Vec<Navigation>,
}

impl SessionOutcome {
	pub fn last(&self) -> Option<&Navigation> {
		self.visited.last()
	}
}

/// Terminal front-end state wrapped around a [`SearchBar`].
pub struct App {
	pub(crate) bar: SearchBar<TerminalNavigator>,
	pub(crate) theme: Theme,
	pub(crate) focused: bool,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) list_state: ListState,
	pub(crate) regions: Regions,
}

impl App {
	/// Wrap `bar` and give it focus, so an initial query shows its results as
	/// soon as the index arrives.
	pub fn new(bar: SearchBar<TerminalNavigator>, theme: Theme) -> Self {
		let mut app = Self {
			bar,
			theme,
			focused: false,
			throbber_state: ThrobberState::default(),
			list_state: ListState::default(),
			regions: Regions::default(),
		};
		app.focus();
		app
	}

	pub(crate) fn focus(&mut self) {
		self.focused = true;
		self.bar.on_focus();
	}

	pub(crate) fn blur(&mut self) {
		self.focused = false;
	}

	/// Drain index updates and advance the spinner.
	pub(crate) fn tick(&mut self) {
		self.bar.pump_index_updates();
		if self.bar.is_loading() {
			self.throbber_state.calc_next();
		}
	}

	pub fn bar(&self) -> &SearchBar<TerminalNavigator> {
		&self.bar
	}

	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn into_outcome(self) -> SessionOutcome {
		let query = self.bar.query().to_string();
		SessionOutcome {
			query,
			visited: self.bar.navigator().visited().to_vec(),
		}
	}
}
