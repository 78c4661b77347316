use thiserror::Error;

/// Errors raised while loading or validating [`Settings`](crate::settings::Settings).
#[derive(Debug, Error)]
pub enum SettingsError {
	/// A configuration source could not be read or deserialized.
	#[error("failed to load configuration: {0}")]
	Load(#[from] config::ConfigError),

	/// The facet order override names an attribute that is empty after trimming.
	#[error("facet order override entry {index} is empty")]
	EmptyOverrideAttribute { index: usize },
}
