//! Layered configuration for the ordering knobs a deployment controls.
//!
//! Sources are merged in increasing priority: the user's
//! `config.toml`, `facetlist.toml` in the working directory, explicitly
//! supplied files, then `FACETLIST__SECTION__KEY` environment variables.
//!
//! ```toml
//! [ordering]
//! disjunctive_faceting = true
//! facet_order_override = ["brand", "color"]
//! unlisted_values = "count"
//! ```

use std::env;
use std::path::PathBuf;

use config::{Config, Environment, File};
use facetlist_model::{Attribute, FacetsOrder};
use serde::Deserialize;

use crate::app_dirs;
use crate::error::SettingsError;
use crate::ordering::{OrderingOptions, UnlistedValues};

const ENV_PREFIX: &str = "FACETLIST";
const ENV_SEPARATOR: &str = "__";
const OVERRIDE_KEY: &str = "ordering.facet_order_override";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub ordering: OrderingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderingSection {
	pub disjunctive_faceting: Option<bool>,
	pub facet_order_override: Option<Vec<String>>,
	pub unlisted_values: Option<UnlistedValues>,
}

impl Settings {
	/// Validate the settings and convert them into [`OrderingOptions`].
	///
	/// An empty override list is treated as no override.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::EmptyOverrideAttribute`] if an override entry
	/// is blank.
	pub fn ordering_options(&self) -> Result<OrderingOptions, SettingsError> {
		let section = &self.ordering;
		let facet_order_override = match &section.facet_order_override {
			Some(names) if !names.is_empty() => Some(parse_override(names)?),
			_ => None,
		};

		Ok(OrderingOptions {
			disjunctive_faceting: section.disjunctive_faceting.unwrap_or(false),
			facet_order_override,
			unlisted_values: section.unlisted_values.unwrap_or_default(),
		})
	}
}

fn parse_override(names: &[String]) -> Result<FacetsOrder, SettingsError> {
	let order = names
		.iter()
		.enumerate()
		.map(|(index, name)| {
			let trimmed = name.trim();
			if trimmed.is_empty() {
				Err(SettingsError::EmptyOverrideAttribute { index })
			} else {
				Ok(Attribute::new(trimmed))
			}
		})
		.collect::<Result<Vec<_>, _>>()?;
	Ok(FacetsOrder { order })
}

/// Builder controlling which sources [`Settings`] are read from.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
	default_files: bool,
	files: Vec<PathBuf>,
	environment: Option<config::Map<String, String>>,
}

impl SettingsLoader {
	#[must_use]
	pub fn new() -> Self {
		Self {
			default_files: true,
			files: Vec::new(),
			environment: None,
		}
	}

	/// Skip the user and working-directory configuration files.
	#[must_use]
	pub fn without_default_files(mut self) -> Self {
		self.default_files = false;
		self
	}

	/// Merge a required configuration file on top of the defaults.
	#[must_use]
	pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
		self.files.push(path.into());
		self
	}

	/// Read environment overrides from `vars` instead of the process
	/// environment.
	#[must_use]
	pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.environment = Some(
			vars.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		);
		self
	}

	/// # Errors
	///
	/// Returns an error if a required file is missing, a source cannot be
	/// parsed, or the merged values do not match [`Settings`].
	pub fn load(self) -> Result<Settings, SettingsError> {
		let mut builder = Config::builder();

		if self.default_files {
			for path in default_config_files() {
				tracing::trace!(path = %path.display(), "considering configuration file");
				builder = builder.add_source(File::from(path).required(false));
			}
		}

		for path in self.files {
			tracing::debug!(path = %path.display(), "loading configuration file");
			builder = builder.add_source(File::from(path).required(true));
		}

		builder = builder.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator(ENV_SEPARATOR)
				.try_parsing(true)
				.list_separator(",")
				.with_list_parse_key(OVERRIDE_KEY)
				.source(self.environment),
		);

		let settings: Settings = builder.build()?.try_deserialize()?;
		tracing::debug!(?settings, "resolved settings");
		Ok(settings)
	}
}

impl Default for SettingsLoader {
	fn default() -> Self {
		Self::new()
	}
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Some(dir) = app_dirs::config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join("facetlist.toml"));
	}

	files
}
