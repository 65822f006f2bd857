use super::Snippet;
use super::fold::{FoldedText, fold_chars};
use crate::index::SearchEntry;

/// Characters of context kept on each side of the first match.
pub const SNIPPET_CONTEXT: usize = 20;

/// Excerpt of `text` around the first case-insensitive occurrence of `query`.
///
/// The window runs from [`SNIPPET_CONTEXT`] characters before the match to
/// the same distance after it, clamped to the text. Every occurrence of the
/// query inside the window is emphasized. The query is matched literally.
pub fn highlight_match(text: &str, query: &str) -> Option<Snippet> {
	let needle = fold_chars(query);
	if text.is_empty() || needle.is_empty() {
		return None;
	}

	let first = FoldedText::new(text).first_match(&needle)?;
	let chars: Vec<char> = text.chars().collect();
	let start = first.start.saturating_sub(SNIPPET_CONTEXT);
	let end = (first.end + SNIPPET_CONTEXT).min(chars.len());

	Some(mark_matches(&chars[start..end], &needle))
}

fn mark_matches(window: &[char], needle: &[char]) -> Snippet {
	let text: String = window.iter().collect();
	let mut snippet = Snippet::default();
	let mut last = 0;
	for range in FoldedText::new(&text).matches(needle) {
		snippet.push(window[last..range.start].iter().collect(), false);
		snippet.push(window[range.clone()].iter().collect(), true);
		last = range.end;
	}
	snippet.push(window[last..].iter().collect(), false);
	snippet
}

/// Highlight for a whole entry: the first field that contains the query wins,
/// tried as title, content, `package.title`, signature, then keywords.
pub fn highlight_entry(entry: &SearchEntry, query: &str) -> Option<Snippet> {
	highlight_match(&entry.title, query)
		.or_else(|| entry.content().and_then(|content| highlight_match(content, query)))
		.or_else(|| {
			entry
				.qualified_title()
				.and_then(|qualified| highlight_match(&qualified, query))
		})
		.or_else(|| {
			entry
				.signature()
				.and_then(|signature| highlight_match(signature, query))
		})
		.or_else(|| {
			entry
				.keywords()
				.iter()
				.find_map(|keyword| highlight_match(keyword, query))
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn html(text: &str, query: &str) -> Option<String> {
		highlight_match(text, query).map(|snippet| snippet.to_html())
	}

	#[test]
	fn marks_preserve_source_casing() {
		assert_eq!(html("Agents", "ag").as_deref(), Some("<mark>Ag</mark>ents"));
		assert_eq!(
			html("OpenAI integration", "OPENAI").as_deref(),
			Some("<mark>OpenAI</mark> integration")
		);
	}

	#[test]
	fn missing_query_yields_nothing() {
		assert_eq!(html("Agents", "zz"), None);
		assert_eq!(html("", "ag"), None);
		assert_eq!(html("Agents", ""), None);
	}

	#[test]
	fn window_is_clamped_to_context() {
		let text = "padding--0123456789abcdefghijKL0123456789abcdefghij--trailer";
		let snippet = highlight_match(text, "kl").expect("match");

		assert_eq!(
			snippet.plain_text(),
			"0123456789abcdefghijKL0123456789abcdefghij"
		);
		assert_eq!(snippet.marks().collect::<Vec<_>>(), vec!["KL"]);
	}

	#[test]
	fn matches_at_either_edge_stay_in_bounds() {
		assert_eq!(html("memory", "me").as_deref(), Some("<mark>me</mark>mory"));
		assert_eq!(html("memory", "ry").as_deref(), Some("memo<mark>ry</mark>"));
	}

	#[test]
	fn every_occurrence_in_the_window_is_marked() {
		assert_eq!(
			html("chain of Chains", "chain").as_deref(),
			Some("<mark>chain</mark> of <mark>Chain</mark>s")
		);
	}

	#[test]
	fn pattern_characters_are_literal() {
		assert_eq!(html("C++ bindings", "c++").as_deref(), Some("<mark>C++</mark> bindings"));
		assert_eq!(html("a.b", ".*"), None);
	}

	#[test]
	fn multibyte_text_is_sliced_on_characters() {
		let snippet = highlight_match("Überblick über Vektoren", "ÜBER").expect("match");
		assert_eq!(snippet.marks().collect::<Vec<_>>(), vec!["Über", "über"]);
	}

	#[test]
	fn entry_fields_are_tried_in_order() {
		let entry = SearchEntry::new("Model", "https://pkg.go.dev/x#Model")
			.with_content("Model is the interface")
			.with_package("llms")
			.with_signature("type Model");

		let by_title = highlight_entry(&entry, "model").expect("title");
		assert_eq!(by_title.to_html(), "<mark>Model</mark>");

		let by_content = highlight_entry(&entry, "interface").expect("content");
		assert!(by_content.to_html().contains("<mark>interface</mark>"));

		let by_package = highlight_entry(&entry, "llms.mo").expect("package");
		assert_eq!(by_package.to_html(), "<mark>llms.Mo</mark>del");

		let by_signature = highlight_entry(&entry, "type m").expect("signature");
		assert_eq!(by_signature.to_html(), "<mark>type M</mark>odel");
	}

	#[test]
	fn keyword_only_matches_still_highlight() {
		let entry = SearchEntry::new("Call", "/call").with_keywords(["function", "llms"]);
		let snippet = highlight_entry(&entry, "func").expect("keyword");
		assert_eq!(snippet.to_html(), "<mark>func</mark>tion");
	}
}
