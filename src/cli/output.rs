use anyhow::Result;
use docsearch::SessionOutcome;
use docsearch::index::IndexOrigin;
use docsearch::navigation::Navigation;
use docsearch::search::MIN_QUERY_LEN;
use docsearch::widget::no_results_message;
use serde_json::json;

use crate::workflow::{OnceReport, Report};

fn origin_label(origin: IndexOrigin) -> &'static str {
	match origin {
		IndexOrigin::Remote => "remote",
		IndexOrigin::Fallback => "fallback",
	}
}

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &Report) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &Report) -> String {
	match report {
		Report::Session(outcome) => format_session_plain(outcome),
		Report::Once(once) => format_once_plain(once),
	}
}

fn format_session_plain(outcome: &SessionOutcome) -> String {
	match outcome.last() {
		Some(Navigation::Route(path)) => format!("route {path}\n"),
		Some(Navigation::External(url)) => format!("external {url}\n"),
		None => format!("No selection (query: '{}')\n", outcome.query),
	}
}

fn format_once_plain(report: &OnceReport) -> String {
	if !report.searchable() {
		return format!("Query must be at least {MIN_QUERY_LEN} characters\n");
	}
	if report.results.is_empty() {
		return format!("{}\n", no_results_message(&report.query));
	}

	let mut out = String::new();
	for result in &report.results {
		let entry = &result.entry;
		let title = match entry.package() {
			Some(package) => format!("{package}.{}", entry.title),
			None => entry.title.clone(),
		};
		let snippet = result
			.display_snippet()
			.map(|snippet| snippet.plain_text())
			.unwrap_or_default();
		out.push_str(&format!("{title}\t{}\t{snippet}\n", entry.url));
	}
	out
}

/// Format the report as a JSON string.
pub(crate) fn format_json(report: &Report) -> Result<String> {
	let payload = match report {
		Report::Session(outcome) => json!({
			"query": outcome.query,
			"selection": outcome.last(),
			"visited": outcome.visited,
		}),
		Report::Once(once) => {
			let message = (once.searchable() && once.results.is_empty())
				.then(|| no_results_message(&once.query));
			json!({
				"query": once.query,
				"index": origin_label(once.origin),
				"results": once.results,
				"message": message,
			})
		}
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report) -> Result<()> {
	println!("{}", format_json(report)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use docsearch::index::fallback_entries;
	use docsearch::search::search;
	use serde_json::Value;

	use super::*;

	fn once(query: &str) -> Report {
		let index = fallback_entries();
		Report::Once(OnceReport {
			query: query.into(),
			origin: IndexOrigin::Fallback,
			results: search(&index, query),
		})
	}

	#[test]
	fn plain_once_lists_title_url_and_snippet() {
		let text = format_plain(&once("mistral"));
		assert_eq!(
			text,
			"Mistral\t/langchaingo/docs/modules/model_io/models/llms/Integrations/mistral\tMistral\n"
		);
	}

	#[test]
	fn plain_once_reports_misses_and_short_queries() {
		assert_eq!(format_plain(&once("zz")), "No results found for \"zz\"\n");
		assert_eq!(format_plain(&once("z")), "Query must be at least 2 characters\n");
	}

	#[test]
	fn json_once_carries_markup_highlights() {
		let json = format_json(&once("mistral")).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["index"], "fallback");
		assert_eq!(value["results"][0]["title"], "Mistral");
		assert_eq!(value["results"][0]["highlight"], "<mark>Mistral</mark>");
		assert_eq!(value["message"], Value::Null);
	}

	#[test]
	fn json_session_includes_last_selection() {
		let outcome = SessionOutcome {
			query: String::new(),
			visited: vec![Navigation::for_url("https://pkg.go.dev/x")],
		};

		let json = format_json(&Report::Session(outcome)).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["selection"]["kind"], "external");
		assert_eq!(value["selection"]["target"], "https://pkg.go.dev/x");
	}

	#[test]
	fn plain_session_without_selection() {
		let outcome = SessionOutcome {
			query: "ag".into(),
			visited: Vec::new(),
		};
		assert_eq!(
			format_plain(&Report::Session(outcome)),
			"No selection (query: 'ag')\n"
		);
	}
}
