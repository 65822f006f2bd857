//! Resolve configuration and cache directories for `docsearch`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "langchaingo";
const APPLICATION: &str = "docsearch";

pub const CONFIG_DIR_ENV: &str = "DOCSEARCH_CONFIG_DIR";
pub const CACHE_DIR_ENV: &str = "DOCSEARCH_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for docsearch"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the cache directory used for the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_is_ignored() {
		// SAFETY: test-local environment manipulation on a name no other test reads.
		unsafe {
			env::set_var("DOCSEARCH_TEST_EMPTY_DIR", "");
		}
		assert_eq!(dir_from_env("DOCSEARCH_TEST_EMPTY_DIR"), None);

		unsafe {
			env::set_var("DOCSEARCH_TEST_EMPTY_DIR", "/tmp/docsearch");
		}
		assert_eq!(
			dir_from_env("DOCSEARCH_TEST_EMPTY_DIR"),
			Some(PathBuf::from("/tmp/docsearch"))
		);

		unsafe {
			env::remove_var("DOCSEARCH_TEST_EMPTY_DIR");
		}
	}
}
