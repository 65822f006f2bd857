/// Trim `value`, treating blank strings as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_values_are_dropped() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(None), None);
		assert_eq!(non_blank(Some(" light ".into())), Some("light".into()));
	}
}
