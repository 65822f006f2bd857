use std::mem;

use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Margin, Position, Rect},
	style::Style,
	text::{Line, Span, Text},
	widgets::{Block, Clear, List, ListItem, Paragraph},
};
use throbber_widgets_tui::Throbber;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::App;
use super::actions::ROW_HEIGHT;
use super::theme::Theme;
use crate::index::IndexOrigin;
use crate::navigation::Navigation;
use crate::search::Snippet;
use crate::widget::{EXTERNAL_GLYPH, InputView, PanelView, ResultRow};

const INPUT_HEIGHT: u16 = 3;
const LOADING_LABEL: &str = "Loading index";

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [input_area, panel_area, status_area] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(area);

		let view = self.bar.view();
		self.regions.input = input_area;
		self.regions.panel = None;
		self.regions.rows = None;

		self.render_input(frame, input_area, &view.input);
		match &view.panel {
			Some(PanelView::Results { rows, active }) => {
				self.render_results(frame, panel_area, rows, *active);
			}
			Some(PanelView::NoMatch { message }) => {
				self.render_no_match(frame, panel_area, message);
			}
			None => {}
		}
		self.render_status(frame, status_area);
	}

	fn render_input(&mut self, frame: &mut Frame, area: Rect, input: &InputView) {
		let block = Block::bordered()
			.title(input.label)
			.border_style(self.theme.header_style());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [text_area, progress_area] = if self.bar.is_loading() {
			let width = LOADING_LABEL.width() as u16 + 3;
			Layout::horizontal([Constraint::Min(1), Constraint::Length(width)]).areas(inner)
		} else {
			[inner, Rect::default()]
		};

		let text = if input.value.is_empty() {
			Span::styled(input.placeholder, self.theme.empty_style())
		} else {
			Span::styled(input.value.as_str(), self.theme.prompt_style())
		};
		frame.render_widget(Paragraph::new(Line::from(text)), text_area);

		if self.bar.is_loading() {
			let muted = self.theme.empty_style();
			let spinner = Throbber::default()
				.label(LOADING_LABEL)
				.style(muted)
				.throbber_style(muted);
			frame.render_stateful_widget(spinner, progress_area, &mut self.throbber_state);
		}

		if self.focused {
			let offset = input.value.width() as u16;
			let x = text_area.x.saturating_add(offset).min(text_area.right().saturating_sub(1));
			frame.set_cursor_position(Position::new(x, text_area.y));
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect, rows: &[ResultRow], active: usize) {
		let wanted = (rows.len() as u16).saturating_mul(ROW_HEIGHT).saturating_add(2);
		let area = Rect {
			height: area.height.min(wanted),
			..area
		};
		if area.height < 3 {
			return;
		}

		let block = Block::bordered().border_style(self.theme.header_style());
		let inner = block.inner(area);
		let width = usize::from(inner.width);
		// Item style, not list highlight style: marks must survive on the active row.
		let items: Vec<ListItem> = rows
			.iter()
			.enumerate()
			.map(|(index, row)| {
				let item = ListItem::new(row_text(row, width, &self.theme));
				if index == active {
					item.style(self.theme.row_highlight_style())
				} else {
					item
				}
			})
			.collect();
		let list = List::new(items).block(block);

		self.list_state.select(Some(active));
		frame.render_widget(Clear, area);
		frame.render_stateful_widget(list, area, &mut self.list_state);

		self.regions.panel = Some(area);
		self.regions.rows = Some(inner);
	}

	fn render_no_match(&mut self, frame: &mut Frame, area: Rect, message: &str) {
		let area = Rect {
			height: area.height.min(3),
			..area
		};
		if area.height < 3 {
			return;
		}
		let paragraph = Paragraph::new(message.to_string())
			.alignment(Alignment::Center)
			.style(self.theme.empty_style())
			.block(Block::bordered().border_style(self.theme.header_style()));
		frame.render_widget(Clear, area);
		frame.render_widget(paragraph, area);
		self.regions.panel = Some(area);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let style = self.theme.header_style();
		let index = match self.bar.index() {
			Some(index) if index.origin == IndexOrigin::Fallback => {
				format!("{} built-in pages", index.len())
			}
			Some(index) => format!("{} entries", index.len()),
			None => String::new(),
		};
		frame.render_widget(Paragraph::new(Span::styled(index, style)), area);

		if let Some(last) = self.bar.navigator().last() {
			let label = match last {
				Navigation::Route(path) => format!("route {path}"),
				Navigation::External(url) => format!("opened {url}"),
			};
			frame.render_widget(
				Paragraph::new(Span::styled(label, style)).alignment(Alignment::Right),
				area,
			);
		}
	}
}

fn row_text(row: &ResultRow, width: usize, theme: &Theme) -> Text<'static> {
	let mut heading = Vec::new();
	if let Some(package) = &row.package {
		heading.push(Span::styled(format!("{package}."), theme.empty_style()));
	}
	heading.push(Span::styled(row.title.clone(), theme.prompt_style()));
	if row.external {
		heading.push(Span::styled(format!(" {EXTERNAL_GLYPH}"), theme.empty_style()));
	}

	let snippet = row
		.snippet
		.as_ref()
		.map(|snippet| snippet_spans(snippet, theme))
		.unwrap_or_default();

	Text::from(vec![
		Line::from(truncate_spans(heading, width)),
		Line::from(truncate_spans(snippet, width)),
	])
}

/// Snippet spans styled for the terminal. Line breaks in the source text are
/// flattened so each result keeps a fixed height.
pub(crate) fn snippet_spans(snippet: &Snippet, theme: &Theme) -> Vec<Span<'static>> {
	snippet
		.spans()
		.iter()
		.map(|span| {
			let style = if span.emphasized {
				theme.highlight_style()
			} else {
				theme.empty_style()
			};
			Span::styled(span.text.replace(['\n', '\r', '\t'], " "), style)
		})
		.collect()
}

/// Cut `spans` to at most `width` display columns, ending with `…` when cut.
pub(crate) fn truncate_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
	let total: usize = spans.iter().map(|span| span.content.width()).sum();
	if total <= width {
		return spans;
	}
	if width == 0 {
		return Vec::new();
	}

	let budget = width - 1;
	let mut used = 0;
	let mut out = Vec::new();
	let mut last_style = Style::default();
	for span in spans {
		last_style = span.style;
		let mut buffer = String::new();
		for ch in span.content.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if used + ch_width > budget {
				break;
			}
			used += ch_width;
			buffer.push(ch);
		}
		let full = buffer.len() == span.content.len();
		if !buffer.is_empty() {
			out.push(Span::styled(mem::take(&mut buffer), span.style));
		}
		if !full {
			break;
		}
	}
	out.push(Span::styled("…", last_style));
	out
}
