use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One searchable unit of the documentation index.
///
/// Field names follow the JSON written by the site's index generator, so an
/// entry deserializes straight out of `search-index.json`. Optional text
/// fields treat an empty string the same as an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
	pub title: String,
	pub url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub package: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub keywords: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub signature: Option<String>,
	#[serde(default, skip_serializing_if = "is_false")]
	pub external: bool,
	/// Generator entry kind (`doc`, `package`, `function`, `type`, `method`).
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<BTreeMap<String, String>>,
}

fn is_false(value: &bool) -> bool {
	!*value
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|text| !text.is_empty())
}

impl SearchEntry {
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: url.into(),
			content: None,
			package: None,
			keywords: None,
			signature: None,
			external: false,
			kind: None,
			metadata: None,
		}
	}

	#[must_use]
	pub fn with_content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	#[must_use]
	pub fn with_package(mut self, package: impl Into<String>) -> Self {
		self.package = Some(package.into());
		self
	}

	#[must_use]
	pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.keywords = Some(keywords.into_iter().map(Into::into).collect());
		self
	}

	#[must_use]
	pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
		self.signature = Some(signature.into());
		self
	}

	#[must_use]
	pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	#[must_use]
	pub fn external(mut self) -> Self {
		self.external = true;
		self
	}

	pub fn content(&self) -> Option<&str> {
		non_empty(&self.content)
	}

	pub fn package(&self) -> Option<&str> {
		non_empty(&self.package)
	}

	pub fn signature(&self) -> Option<&str> {
		non_empty(&self.signature)
	}

	pub fn keywords(&self) -> &[String] {
		self.keywords.as_deref().unwrap_or_default()
	}

	/// `package.title`, available only when the entry carries a package.
	pub fn qualified_title(&self) -> Option<String> {
		self.package()
			.map(|package| format!("{package}.{}", self.title))
	}

	/// Whether the entry satisfies the index invariant: a non-empty title and a
	/// non-empty destination.
	pub fn is_valid(&self) -> bool {
		!self.title.trim().is_empty() && !self.url.trim().is_empty()
	}
}

/// Generator metadata carried by the wrapped index document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexMeta {
	pub generated: String,
	pub doc_count: usize,
	pub symbol_count: usize,
	pub version: String,
}
