mod args;
mod output;
mod resolve;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{print_json, print_plain, print_summary};
pub(crate) use resolve::resolve_options;
