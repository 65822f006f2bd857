use super::SearchEntry;

const PAGES: &[(&str, &str, &str)] = &[
	(
		"Getting Started",
		"/langchaingo/docs/",
		"LangChainGo documentation",
	),
	(
		"Tutorials",
		"/langchaingo/docs/tutorials/",
		"Step-by-step guides to build complete applications",
	),
	(
		"Building a Simple Chat Application",
		"/langchaingo/docs/tutorials/basic-chat-app",
		"Learn the basics with conversation memory",
	),
	(
		"How-to Guides",
		"/langchaingo/docs/how-to/",
		"Practical solutions for specific problems",
	),
	(
		"Configure LLM Providers",
		"/langchaingo/docs/how-to/configure-llm-providers",
		"How to configure different LLM providers",
	),
	(
		"Concepts",
		"/langchaingo/docs/concepts/",
		"Core concepts and architecture",
	),
	(
		"LangChainGo Architecture",
		"/langchaingo/docs/concepts/architecture",
		"Architecture and design principles",
	),
	(
		"Agents",
		"/langchaingo/docs/modules/agents/",
		"Agent functionality",
	),
	(
		"Chains",
		"/langchaingo/docs/modules/chains/",
		"Chain operations",
	),
	(
		"Models",
		"/langchaingo/docs/modules/model_io/models/",
		"Language models",
	),
	(
		"OpenAI",
		"/langchaingo/docs/modules/model_io/models/llms/Integrations/openai",
		"OpenAI integration",
	),
	(
		"Mistral",
		"/langchaingo/docs/modules/model_io/models/llms/Integrations/mistral",
		"Mistral AI integration",
	),
	(
		"Vector Stores",
		"/langchaingo/docs/modules/data_connection/vector_stores/",
		"Vector database storage",
	),
	(
		"PGVector",
		"/langchaingo/docs/modules/data_connection/vector_stores/pgvector",
		"PostgreSQL vector storage",
	),
	(
		"Text Splitters",
		"/langchaingo/docs/modules/data_connection/text_splitters/",
		"Document text splitting",
	),
	(
		"Prompts",
		"/langchaingo/docs/modules/model_io/prompts/",
		"Prompt templates and management",
	),
	(
		"Memory",
		"/langchaingo/docs/modules/memory/",
		"Conversation memory management",
	),
];

const API_REFERENCE: (&str, &str, &str) = (
	"API Reference",
	"https://pkg.go.dev/github.com/tmc/langchaingo",
	"Complete API documentation",
);

/// The fixed dataset installed when the real index cannot be loaded.
pub fn fallback_entries() -> Vec<SearchEntry> {
	let (title, url, content) = API_REFERENCE;
	PAGES
		.iter()
		.map(|&(title, url, content)| SearchEntry::new(title, url).with_content(content))
		.chain(std::iter::once(
			SearchEntry::new(title, url).with_content(content).external(),
		))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fallback_entries_are_valid() {
		let entries = fallback_entries();
		assert_eq!(entries.len(), 18);
		assert!(entries.iter().all(SearchEntry::is_valid));
	}

	#[test]
	fn only_the_api_reference_is_external() {
		let external: Vec<_> = fallback_entries()
			.into_iter()
			.filter(|entry| entry.external)
			.map(|entry| entry.title)
			.collect();
		assert_eq!(external, vec!["API Reference"]);
	}
}
