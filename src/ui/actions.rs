use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use crate::widget::{Key, PointerTarget};

/// Lines each result occupies in the panel.
pub(crate) const ROW_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
	Continue,
	Quit,
}

impl App {
	pub(crate) fn handle_event(&mut self, event: Event) -> Control {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Mouse(mouse) => {
				self.handle_mouse(mouse);
				Control::Continue
			}
			_ => Control::Continue,
		}
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Control {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Control::Quit;
		}

		if !self.focused {
			return match key.code {
				KeyCode::Char('/') => {
					self.focus();
					Control::Continue
				}
				KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
				_ => Control::Continue,
			};
		}

		match key.code {
			KeyCode::Esc => {
				self.bar.on_key(Key::Escape);
			}
			KeyCode::Enter => {
				self.bar.on_key(Key::Enter);
			}
			KeyCode::Up => {
				self.bar.on_key(Key::Up);
			}
			KeyCode::Down => {
				self.bar.on_key(Key::Down);
			}
			KeyCode::Tab | KeyCode::BackTab => self.blur(),
			KeyCode::Backspace => {
				let mut query = self.bar.query().to_string();
				if query.pop().is_some() {
					self.bar.on_input(query);
				}
			}
			KeyCode::Char(ch)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				let mut query = self.bar.query().to_string();
				query.push(ch);
				self.bar.on_input(query);
			}
			_ => {}
		}
		Control::Continue
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let position = Position::new(mouse.column, mouse.row);

		if self.regions.input.contains(position) {
			self.bar.on_pointer_down(PointerTarget::Inside);
			self.focus();
			return;
		}

		if self.regions.panel.is_some_and(|panel| panel.contains(position)) {
			self.bar.on_pointer_down(PointerTarget::Inside);
			if let Some(row) = self.row_at(position) {
				self.bar.select(row);
			}
			return;
		}

		self.bar.on_pointer_down(PointerTarget::Outside);
		self.blur();
	}

	fn row_at(&self, position: Position) -> Option<usize> {
		let rows = self.regions.rows?;
		if !rows.contains(position) {
			return None;
		}
		let offset = usize::from((position.y - rows.y) / ROW_HEIGHT);
		Some(self.list_state.offset() + offset)
	}
}
