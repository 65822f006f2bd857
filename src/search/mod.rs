//! Substring matching over the loaded index and snippet highlighting.
//!
//! Matching is plain case-insensitive containment: no ranking, no fuzzy or
//! tokenized matching. The matcher and the highlighter fold case the same
//! way, so every result carries a highlight.

mod fold;
mod highlight;
mod matcher;
mod snippet;

pub use highlight::{SNIPPET_CONTEXT, highlight_entry, highlight_match};
pub use matcher::{MAX_RESULTS, MIN_QUERY_LEN, SearchResult, is_searchable, matches_query, search};
pub use snippet::{Snippet, SnippetSpan};

#[cfg(test)]
mod tests;
