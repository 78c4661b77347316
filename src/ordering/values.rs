use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use facetlist_model::{Facet, FacetValuesOrder, SortRule};

use super::UnlistedValues;

/// Order the values of a single attribute.
///
/// Values are unique by value string in the output; the first occurrence in
/// `values` wins.
pub(super) fn order_values(
	values: &[Facet],
	order: Option<&FacetValuesOrder>,
	unlisted: UnlistedValues,
) -> Vec<Facet> {
	let unique = unique_values(values);

	let Some(order) = order else {
		let mut ordered = unique;
		if unlisted == UnlistedValues::Count {
			sort_by_count(&mut ordered);
		}
		return ordered.into_iter().cloned().collect();
	};

	let by_value: HashMap<&str, &Facet> = unique
		.iter()
		.map(|facet| (facet.value.as_str(), *facet))
		.collect();

	let mut placed = HashSet::with_capacity(order.order.len());
	let mut ordered: Vec<&Facet> = order
		.order
		.iter()
		.filter_map(|value| by_value.get(value.as_str()).copied())
		.filter(|facet| placed.insert(facet.value.as_str()))
		.collect();

	let mut remaining: Vec<&Facet> = unique
		.into_iter()
		.filter(|facet| !placed.contains(facet.value.as_str()))
		.collect();

	match order.sort_remaining_by {
		SortRule::Count => sort_by_count(&mut remaining),
		SortRule::Alpha => remaining.sort_by(|a, b| a.value.cmp(&b.value)),
		SortRule::Hidden => remaining.clear(),
	}

	ordered.extend(remaining);
	ordered.into_iter().cloned().collect()
}

fn unique_values(values: &[Facet]) -> Vec<&Facet> {
	let mut seen = HashSet::with_capacity(values.len());
	values
		.iter()
		.filter(|facet| seen.insert(facet.value.as_str()))
		.collect()
}

// Stable, so equal counts keep their input order.
fn sort_by_count(values: &mut [&Facet]) {
	values.sort_by_key(|facet| Reverse(facet.count));
}
