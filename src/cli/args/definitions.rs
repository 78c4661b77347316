use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, UnlistedValuesArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `facetlist` binary.
#[derive(Parser, Debug)]
#[command(
    name = "facetlist",
    version,
    long_version = long_version(),
    about = "Order the facets of a search response for display",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "FILE",
        help = "Search response JSON to read (default: stdin)"
    )]
    pub(crate) input: Option<PathBuf>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "FACETLIST_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'm',
        long,
        help = "Treat the input as a multi-index response and order its first result (default: disabled)"
    )]
    pub(crate) multi: bool,
    #[arg(
        short = 'd',
        long = "disjunctive",
        value_parser = BoolishValueParser::new(),
        help = "Merge disjunctive facets before ordering (default: disabled)"
    )]
    pub(crate) disjunctive: Option<bool>,
    #[arg(
        short = 'f',
        long = "facet-order",
        value_delimiter = ',',
        value_name = "ATTRIBUTE",
        help = "Comma-separated attribute order replacing the response's own (default: none)"
    )]
    pub(crate) facet_order: Option<Vec<String>>,
    #[arg(
        short = 'u',
        long = "unlisted-values",
        value_enum,
        help = "Value order for attributes without an explicit one (default: preserve)"
    )]
    pub(crate) unlisted_values: Option<UnlistedValuesArg>,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration to stderr before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity; repeat for more detail (default: warnings only)"
    )]
    pub(crate) verbose: u8,
}
