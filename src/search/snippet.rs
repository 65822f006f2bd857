use std::fmt;

use serde::{Serialize, Serializer};

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// A run of snippet text, emphasized when it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSpan {
	pub text: String,
	pub emphasized: bool,
}

/// Excerpt shown under a search result.
///
/// Kept as structured spans so a renderer can style matches directly;
/// [`Snippet::to_html`] produces the markup form where the only tags are the
/// `<mark>` wrappers added here and all source text is escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippet {
	spans: Vec<SnippetSpan>,
}

impl Snippet {
	/// A snippet with no emphasis.
	pub fn plain(text: impl Into<String>) -> Self {
		let mut snippet = Self::default();
		snippet.push(text.into(), false);
		snippet
	}

	/// Append text, merging it into the previous span when the emphasis matches.
	pub(crate) fn push(&mut self, text: String, emphasized: bool) {
		if text.is_empty() {
			return;
		}
		match self.spans.last_mut() {
			Some(last) if last.emphasized == emphasized => last.text.push_str(&text),
			_ => self.spans.push(SnippetSpan { text, emphasized }),
		}
	}

	pub fn spans(&self) -> &[SnippetSpan] {
		&self.spans
	}

	pub fn is_empty(&self) -> bool {
		self.spans.is_empty()
	}

	/// Emphasized fragments, in order.
	pub fn marks(&self) -> impl Iterator<Item = &str> {
		self.spans
			.iter()
			.filter(|span| span.emphasized)
			.map(|span| span.text.as_str())
	}

	/// Snippet text without any markup.
	pub fn plain_text(&self) -> String {
		self.spans.iter().map(|span| span.text.as_str()).collect()
	}

	pub fn to_html(&self) -> String {
		let mut html = String::new();
		for span in &self.spans {
			if span.emphasized {
				html.push_str(MARK_OPEN);
				escape_html_into(&span.text, &mut html);
				html.push_str(MARK_CLOSE);
			} else {
				escape_html_into(&span.text, &mut html);
			}
		}
		html
	}
}

impl fmt::Display for Snippet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_html())
	}
}

impl Serialize for Snippet {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_html())
	}
}

fn escape_html_into(text: &str, out: &mut String) {
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			other => out.push(other),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn adjacent_spans_with_equal_emphasis_merge() {
		let mut snippet = Snippet::default();
		snippet.push("Ag".into(), true);
		snippet.push(String::new(), false);
		snippet.push("en".into(), false);
		snippet.push("ts".into(), false);

		assert_eq!(snippet.spans().len(), 2);
		assert_eq!(snippet.to_html(), "<mark>Ag</mark>ents");
	}

	#[test]
	fn source_markup_is_escaped() {
		let mut snippet = Snippet::plain("a <b>");
		snippet.push("&".into(), true);

		assert_eq!(snippet.to_html(), "a &lt;b&gt;<mark>&amp;</mark>");
		assert_eq!(snippet.plain_text(), "a <b>&");
	}

	#[test]
	fn serializes_as_markup() {
		let mut snippet = Snippet::default();
		snippet.push("Open".into(), true);
		snippet.push("AI".into(), false);

		let json = serde_json::to_string(&snippet).expect("json");
		assert_eq!(json, r#""<mark>Open</mark>AI""#);
	}
}
