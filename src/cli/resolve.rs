use anyhow::{Context, Result};
use facetlist::{OrderingOptions, Settings, SettingsLoader};

use super::CliArgs;

/// Load configuration, apply command-line overrides and validate the result.
pub(crate) fn resolve_options(cli: &CliArgs) -> Result<OrderingOptions> {
	let mut loader = SettingsLoader::new();
	if cli.no_config {
		loader = loader.without_default_files();
	}
	for path in &cli.config {
		loader = loader.with_file(path);
	}

	let mut settings = loader.load().context("failed to load configuration")?;
	apply_cli_overrides(&mut settings, cli);
	settings
		.ordering_options()
		.context("invalid ordering configuration")
}

fn apply_cli_overrides(settings: &mut Settings, cli: &CliArgs) {
	let ordering = &mut settings.ordering;
	if let Some(value) = cli.disjunctive {
		ordering.disjunctive_faceting = Some(value);
	}
	if let Some(order) = &cli.facet_order {
		ordering.facet_order_override = Some(order.clone());
	}
	if let Some(policy) = cli.unlisted_values {
		ordering.unlisted_values = Some(policy.into());
	}
}
