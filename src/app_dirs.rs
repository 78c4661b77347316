//! Resolve the configuration directory for `facetlist`.
//!
//! An environment override wins; otherwise the platform-appropriate location
//! provided by the `directories` crate is used.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "facetlist";

const CONFIG_DIR_ENV: &str = "FACETLIST_CONFIG_DIR";

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

/// Return the directory holding the user's `config.toml`, if one can be
/// determined for this platform.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Some(dir);
	}

	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.map(|dirs| dirs.config_local_dir().to_path_buf())
}
