use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;

use super::*;
use crate::index::SearchEntry;

fn entry_strategy() -> impl Strategy<Value = SearchEntry> {
	(
		"[A-Za-z][A-Za-z0-9 ]{0,20}",
		"/[a-z/]{0,15}",
		proptest::option::of("[A-Za-z0-9 .]{0,60}"),
		proptest::option::of("[a-z]{1,8}"),
		proptest::option::of(vec("[a-z]{1,10}", 0..4)),
		proptest::option::of("[A-Za-z(). ]{0,30}"),
		any::<bool>(),
	)
		.prop_map(
			|(title, url, content, package, keywords, signature, external)| SearchEntry {
				title,
				url,
				content,
				package,
				keywords,
				signature,
				external,
				kind: None,
				metadata: None,
			},
		)
}

fn searchable_fields(entry: &SearchEntry) -> Vec<String> {
	let mut fields = vec![entry.title.clone()];
	fields.extend(entry.content().map(str::to_string));
	fields.extend(entry.qualified_title());
	fields.extend(entry.keywords().iter().cloned());
	fields.extend(entry.signature().map(str::to_string));
	fields
}

fn slice_chars(text: &str, start: Index, len: usize) -> Option<String> {
	let chars: Vec<char> = text.chars().collect();
	if chars.len() < len {
		return None;
	}
	let offset = start.index(chars.len() - len + 1);
	Some(chars[offset..offset + len].iter().collect())
}

proptest! {
	#[test]
	fn short_queries_never_match(index in vec(entry_strategy(), 0..20), query in "\\PC{0,1}") {
		prop_assert!(search(&index, &query).is_empty());
	}

	#[test]
	fn result_count_is_bounded(index in vec(entry_strategy(), 0..40), query in "[a-e ]{2,3}") {
		prop_assert!(search(&index, &query).len() <= MAX_RESULTS);
	}

	#[test]
	fn entries_containing_the_query_are_returned(
		index in vec(entry_strategy(), 1..=MAX_RESULTS),
		pick in any::<Index>(),
		field in any::<Index>(),
		start in any::<Index>(),
		len in 2usize..6,
		upper in any::<bool>(),
	) {
		let entry = pick.get(&index).clone();
		let fields = searchable_fields(&entry);
		let text = field.get(&fields);
		let query = slice_chars(text, start, len);
		prop_assume!(query.is_some());
		let query = query.unwrap_or_default();
		let query = if upper { query.to_uppercase() } else { query.to_lowercase() };

		let results = search(&index, &query);

		prop_assert!(results.iter().any(|result| result.entry == entry));
	}

	#[test]
	fn every_result_is_highlighted(
		index in vec(entry_strategy(), 1..20),
		pick in any::<Index>(),
		field in any::<Index>(),
		start in any::<Index>(),
		len in 2usize..4,
	) {
		let entry = pick.get(&index);
		let fields = searchable_fields(entry);
		let text = field.get(&fields);
		let query = slice_chars(text, start, len);
		prop_assume!(query.is_some());
		let query = query.unwrap_or_default();

		for result in search(&index, &query) {
			prop_assert!(result.highlight.is_some(), "no highlight for {:?}", result.entry);
		}
	}

	#[test]
	fn snippets_stay_inside_the_text(
		text in "[a-zA-Z ]{0,120}",
		start in any::<Index>(),
		len in 1usize..4,
	) {
		let query = slice_chars(&text, start, len);
		prop_assume!(query.is_some());
		let query = query.unwrap_or_default();

		let snippet = highlight_match(&text, &query);
		prop_assert!(snippet.is_some());
		let plain = snippet.map(|snippet| snippet.plain_text()).unwrap_or_default();
		prop_assert!(text.contains(&plain));
		prop_assert!(plain.chars().count() <= len + 2 * SNIPPET_CONTEXT);
	}

	#[test]
	fn highlighting_ignores_case(text in "[a-zA-Z ]{2,60}", start in any::<Index>(), len in 2usize..5) {
		let query = slice_chars(&text, start, len);
		prop_assume!(query.is_some());
		let query = query.unwrap_or_default().to_uppercase();

		let snippet = highlight_match(&text, &query);
		prop_assert!(snippet.is_some());
		let snippet = snippet.unwrap_or_default();
		// Adjacent matches merge into one span.
		for mark in snippet.marks() {
			prop_assert_eq!(mark.to_uppercase(), query.repeat(mark.len() / query.len()));
		}
	}
}
