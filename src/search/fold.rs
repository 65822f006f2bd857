use std::ops::Range;

/// Lowercase `text` one character at a time.
///
/// Matching and highlighting both use this folding so that a query which
/// selects an entry is always found again when the snippet is built.
pub(crate) fn fold(text: &str) -> String {
	text.chars().flat_map(char::to_lowercase).collect()
}

pub(crate) fn fold_chars(text: &str) -> Vec<char> {
	text.chars().flat_map(char::to_lowercase).collect()
}

/// Folded text that remembers which source character produced each folded
/// character, so matches can be mapped back onto the original casing.
pub(crate) struct FoldedText {
	chars: Vec<char>,
	origins: Vec<usize>,
}

impl FoldedText {
	pub(crate) fn new(text: &str) -> Self {
		let mut chars = Vec::with_capacity(text.len());
		let mut origins = Vec::with_capacity(text.len());
		for (index, ch) in text.chars().enumerate() {
			for lowered in ch.to_lowercase() {
				chars.push(lowered);
				origins.push(index);
			}
		}
		Self { chars, origins }
	}

	fn find_from(&self, needle: &[char], from: usize) -> Option<usize> {
		if needle.is_empty() || self.chars.len() < needle.len() {
			return None;
		}
		let last_start = self.chars.len() - needle.len();
		(from..=last_start).find(|&start| self.chars[start..].starts_with(needle))
	}

	fn source_range(&self, start: usize, len: usize) -> Range<usize> {
		self.origins[start]..self.origins[start + len - 1] + 1
	}

	/// Source character range of the first occurrence of `needle`.
	pub(crate) fn first_match(&self, needle: &[char]) -> Option<Range<usize>> {
		self.find_from(needle, 0)
			.map(|start| self.source_range(start, needle.len()))
	}

	/// Source character ranges of every non-overlapping occurrence of
	/// `needle`, left to right.
	pub(crate) fn matches(&self, needle: &[char]) -> Vec<Range<usize>> {
		let mut ranges = Vec::new();
		let mut cursor = 0;
		while let Some(start) = self.find_from(needle, cursor) {
			let range = self.source_range(start, needle.len());
			cursor = start + needle.len();
			while cursor < self.origins.len() && self.origins[cursor] < range.end {
				cursor += 1;
			}
			ranges.push(range);
		}
		ranges
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matches_map_back_to_source_characters() {
		let folded = FoldedText::new("OpenAI and openai");
		let needle = fold_chars("OPENAI");

		assert_eq!(folded.first_match(&needle), Some(0..6));
		assert_eq!(folded.matches(&needle), vec![0..6, 11..17]);
	}

	#[test]
	fn matches_do_not_overlap() {
		let folded = FoldedText::new("aaaa");
		assert_eq!(folded.matches(&fold_chars("aa")), vec![0..2, 2..4]);
	}

	#[test]
	fn expanding_lowercase_keeps_positions() {
		// U+0130 lowercases to two characters.
		let folded = FoldedText::new("\u{130}stanbul");
		let needle = fold_chars("stan");

		assert_eq!(folded.first_match(&needle), Some(1..5));
	}

	#[test]
	fn empty_needle_never_matches() {
		let folded = FoldedText::new("anything");
		assert_eq!(folded.first_match(&[]), None);
		assert!(folded.matches(&[]).is_empty());
	}

	#[test]
	fn fold_lowers_each_character() {
		assert_eq!(fold("LangChainGo"), "langchaingo");
	}
}
