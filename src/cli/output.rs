use std::fmt::Write;

use anyhow::Result;
use facetlist::{AttributedFacets, OrderingOptions};

/// Format the effective ordering options.
pub(crate) fn format_summary(options: &OrderingOptions) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(
		out,
		"  Disjunctive faceting: {}",
		bool_to_word(options.disjunctive_faceting)
	);
	match &options.facet_order_override {
		Some(order) => {
			let names: Vec<&str> = order.order.iter().map(|a| a.as_str()).collect();
			let _ = writeln!(out, "  Facet order override: {}", names.join(", "));
		}
		None => {
			let _ = writeln!(out, "  Facet order override: (use the response's order)");
		}
	}
	let _ = writeln!(out, "  Unlisted values: {}", options.unlisted_values.as_str());
	out
}

/// Print the effective ordering options to stderr, keeping stdout for the
/// ordered facets.
pub(crate) fn print_summary(options: &OrderingOptions) {
	eprint!("{}", format_summary(options));
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}

/// Format the ordered facets as an indented listing.
pub(crate) fn format_plain(facets: &[AttributedFacets]) -> String {
	let mut out = String::new();
	for entry in facets {
		let _ = writeln!(out, "{}", entry.attribute);
		for facet in &entry.facets {
			let _ = writeln!(out, "  {} ({})", facet.value, facet.count);
		}
	}
	out
}

/// Print a plain-text representation of the ordered facets.
pub(crate) fn print_plain(facets: &[AttributedFacets]) {
	if facets.is_empty() {
		println!("No facets");
		return;
	}
	print!("{}", format_plain(facets));
}

/// Format the ordered facets as a JSON string.
pub(crate) fn format_facets_json(facets: &[AttributedFacets]) -> Result<String> {
	Ok(serde_json::to_string_pretty(facets)?)
}

/// Print the JSON representation of the ordered facets.
pub(crate) fn print_json(facets: &[AttributedFacets]) -> Result<()> {
	println!("{}", format_facets_json(facets)?);
	Ok(())
}
