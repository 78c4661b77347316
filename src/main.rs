mod cli;
mod workflow;

use std::io::Read;
use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain, print_summary};
use facetlist::OrderingOptions;
use workflow::OrderingWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	facetlist::logging::initialize(cli.verbose);

	let options = cli::resolve_options(&cli)?;

	if cli.print_config {
		print_summary(&options);
	}

	run_ordering(&cli, options)
}

/// Order the input response and print the result in the chosen format.
fn run_ordering(cli: &CliArgs, options: OrderingOptions) -> Result<()> {
	let input = read_input(cli.input.as_deref())?;
	let facets = OrderingWorkflow::from_options(options).run(&input, cli.multi)?;

	match cli.output {
		OutputFormat::Plain => print_plain(&facets),
		OutputFormat::Json => print_json(&facets)?,
	}

	Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) => fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display())),
		None => {
			let mut buffer = String::new();
			io::stdin()
				.read_to_string(&mut buffer)
				.context("failed to read standard input")?;
			Ok(buffer)
		}
	}
}
