//! Facet ordering.
//!
//! [`FacetsOrderer`] turns a raw attribute → values mapping and a
//! [`FacetOrdering`] directive into the list presentation code renders:
//!
//! * attributes named by the directive come first, in directive order;
//!   names with no facets are skipped;
//! * every other attribute follows, in the order it was received;
//! * within an attribute, values named by its [`FacetValuesOrder`] come
//!   first and the rest follow its [`SortRule`];
//! * attributes without a value order are handled by [`UnlistedValues`].
//!
//! The orderer is total: a directive naming unknown attributes or values
//! degrades to skipping them, and empty inputs yield an empty list.
//!
//! [`FacetValuesOrder`]: facetlist_model::FacetValuesOrder
//! [`SortRule`]: facetlist_model::SortRule

mod merge;
mod values;

use std::borrow::Cow;
use std::collections::HashSet;

use facetlist_model::{AttributedFacets, FacetOrdering, FacetsMap, FacetsOrder, SearchResponse};
use serde::{Deserialize, Serialize};

pub use merge::merge_disjunctive;

/// Value order applied to attributes the directive gives no value order for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlistedValues {
	/// Keep values in the order the search returned them.
	#[default]
	Preserve,
	/// Sort values by descending count, ties in input order.
	Count,
}

impl UnlistedValues {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			UnlistedValues::Preserve => "preserve",
			UnlistedValues::Count => "count",
		}
	}
}

/// Computes the ordered facet list for one directive.
#[derive(Debug, Clone, Copy)]
pub struct FacetsOrderer<'a> {
	ordering: &'a FacetOrdering,
	unlisted_values: UnlistedValues,
}

impl<'a> FacetsOrderer<'a> {
	#[must_use]
	pub fn new(ordering: &'a FacetOrdering) -> Self {
		Self {
			ordering,
			unlisted_values: UnlistedValues::default(),
		}
	}

	#[must_use]
	pub fn with_unlisted_values(mut self, unlisted_values: UnlistedValues) -> Self {
		self.unlisted_values = unlisted_values;
		self
	}

	/// Order `facets` according to the directive.
	///
	/// Every attribute of `facets` appears exactly once in the output.
	#[must_use]
	pub fn order(&self, facets: &FacetsMap) -> Vec<AttributedFacets> {
		let named = self
			.ordering
			.facets
			.order
			.iter()
			.filter_map(|attribute| facets.get_key_value(attribute.as_str()));

		let mut emitted = HashSet::with_capacity(facets.len());
		named
			.chain(facets.iter())
			.filter(|(attribute, _)| emitted.insert(attribute.as_str()))
			.map(|(attribute, values)| {
				let order = self.ordering.values_order(attribute.as_str());
				AttributedFacets {
					attribute: attribute.clone(),
					facets: values::order_values(values, order, self.unlisted_values),
				}
			})
			.collect()
	}
}

/// Shorthand for [`FacetsOrderer::order`] with default settings.
#[must_use]
pub fn order_facets(ordering: &FacetOrdering, facets: &FacetsMap) -> Vec<AttributedFacets> {
	FacetsOrderer::new(ordering).order(facets)
}

/// Deployment-level knobs applied around the orderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingOptions {
	/// Merge disjunctive facets into the primary facets before ordering.
	pub disjunctive_faceting: bool,
	/// Attribute order used instead of the one carried by the directive.
	pub facet_order_override: Option<FacetsOrder>,
	pub unlisted_values: UnlistedValues,
}

impl OrderingOptions {
	#[must_use]
	pub fn with_disjunctive_faceting(mut self, enabled: bool) -> Self {
		self.disjunctive_faceting = enabled;
		self
	}

	#[must_use]
	pub fn with_facet_order_override(mut self, order: FacetsOrder) -> Self {
		self.facet_order_override = Some(order);
		self
	}

	#[must_use]
	pub fn with_unlisted_values(mut self, unlisted_values: UnlistedValues) -> Self {
		self.unlisted_values = unlisted_values;
		self
	}

	/// Order `facets` under `ordering`, honouring the override and the
	/// unlisted-values policy.
	#[must_use]
	pub fn order(&self, ordering: &FacetOrdering, facets: &FacetsMap) -> Vec<AttributedFacets> {
		let ordering = match &self.facet_order_override {
			Some(order) => Cow::Owned(ordering.clone().with_facets_order(order.clone())),
			None => Cow::Borrowed(ordering),
		};
		FacetsOrderer::new(&ordering)
			.with_unlisted_values(self.unlisted_values)
			.order(facets)
	}

	/// Compute the ordered facets for a search response.
	///
	/// Returns an empty list when the response carries no facets or no
	/// ordering directive.
	#[must_use]
	pub fn ordered_facets(&self, response: &SearchResponse) -> Vec<AttributedFacets> {
		let (Some(ordering), Some(facets)) = (response.facet_ordering(), response.facets.as_ref())
		else {
			return Vec::new();
		};

		match (&response.disjunctive_facets, self.disjunctive_faceting) {
			(Some(disjunctive), true) => {
				let mut merged = facets.clone();
				merge_disjunctive(&mut merged, disjunctive);
				self.order(ordering, &merged)
			}
			_ => self.order(ordering, facets),
		}
	}
}

#[cfg(test)]
mod tests {
	use facetlist_model::{Facet, FacetValuesOrder, SortRule};

	use super::*;

	fn facets(entries: &[(&str, &[(&str, u64)])]) -> FacetsMap {
		entries
			.iter()
			.map(|(attribute, values)| {
				let values = values
					.iter()
					.map(|(value, count)| Facet::new(*value, *count))
					.collect();
				((*attribute).into(), values)
			})
			.collect()
	}

	fn attributes(ordered: &[AttributedFacets]) -> Vec<&str> {
		ordered.iter().map(|entry| entry.attribute.as_str()).collect()
	}

	fn values(ordered: &[AttributedFacets], attribute: &str) -> Vec<String> {
		ordered
			.iter()
			.find(|entry| entry.attribute.as_str() == attribute)
			.map(|entry| entry.values().map(str::to_owned).collect())
			.unwrap_or_default()
	}

	#[test]
	fn named_attributes_lead_and_the_rest_keep_input_order() {
		let ordering = FacetOrdering::new(FacetsOrder::new(["A", "B", "C"]));
		let input = facets(&[("C", &[("x", 1)]), ("A", &[("y", 1)]), ("D", &[("z", 1)])]);

		let ordered = order_facets(&ordering, &input);
		assert_eq!(attributes(&ordered), ["A", "C", "D"]);
	}

	#[test]
	fn unknown_attributes_in_the_directive_are_skipped() {
		let ordering = FacetOrdering::new(FacetsOrder::new(["Z"]));
		let input = facets(&[("color", &[("red", 2)])]);

		let ordered = order_facets(&ordering, &input);
		assert_eq!(attributes(&ordered), ["color"]);
	}

	#[test]
	fn repeated_names_in_the_directive_are_emitted_once() {
		let ordering = FacetOrdering::new(FacetsOrder::new(["size", "color", "size"]));
		let input = facets(&[("color", &[("red", 2)]), ("size", &[("m", 1)])]);

		let ordered = order_facets(&ordering, &input);
		assert_eq!(attributes(&ordered), ["size", "color"]);
	}

	#[test]
	fn explicit_values_lead_and_the_rest_sort_by_count() {
		let ordering = FacetOrdering::new(FacetsOrder::default())
			.with_values("X", FacetValuesOrder::new(["c"], SortRule::Count));
		let input = facets(&[("X", &[("a", 5), ("b", 9), ("c", 1)])]);

		let ordered = order_facets(&ordering, &input);
		assert_eq!(values(&ordered, "X"), ["c", "b", "a"]);
	}

	#[test]
	fn hidden_policy_keeps_only_named_values() {
		let ordering = FacetOrdering::new(FacetsOrder::default())
			.with_values("X", FacetValuesOrder::new(["c"], SortRule::Hidden));
		let input = facets(&[("X", &[("a", 5), ("b", 9), ("c", 1)])]);

		let ordered = order_facets(&ordering, &input);
		assert_eq!(values(&ordered, "X"), ["c"]);
	}

	#[test]
	fn unlisted_values_preserve_input_order_by_default() {
		let ordering = FacetOrdering::default();
		let input = facets(&[("X", &[("a", 1), ("b", 9), ("c", 4)])]);

		let ordered = order_facets(&ordering, &input);
		assert_eq!(values(&ordered, "X"), ["a", "b", "c"]);
	}

	#[test]
	fn unlisted_values_can_sort_by_count() {
		let ordering = FacetOrdering::default();
		let input = facets(&[("X", &[("a", 1), ("b", 9), ("c", 4), ("d", 9)])]);

		let ordered = FacetsOrderer::new(&ordering)
			.with_unlisted_values(UnlistedValues::Count)
			.order(&input);
		assert_eq!(values(&ordered, "X"), ["b", "d", "c", "a"]);
	}

	#[test]
	fn ordering_is_deterministic() {
		let ordering = FacetOrdering::new(FacetsOrder::new(["size"]))
			.with_values("color", FacetValuesOrder::new(["blue"], SortRule::Count));
		let input = facets(&[
			("color", &[("red", 3), ("green", 3), ("blue", 1)]),
			("size", &[("s", 2), ("m", 2)]),
			("brand", &[("acme", 7)]),
		]);

		let first = order_facets(&ordering, &input);
		let second = order_facets(&ordering, &input);
		assert_eq!(first, second);
		assert_eq!(attributes(&first), ["size", "color", "brand"]);
		assert_eq!(values(&first, "color"), ["blue", "red", "green"]);
	}

	#[test]
	fn empty_inputs_yield_an_empty_list() {
		let ordering = FacetOrdering::new(FacetsOrder::new(["color"]));
		assert!(order_facets(&ordering, &FacetsMap::new()).is_empty());
	}

	#[test]
	fn override_replaces_the_attribute_order_only() {
		let ordering = FacetOrdering::new(FacetsOrder::new(["color", "size"]))
			.with_values("color", FacetValuesOrder::new(["blue"], SortRule::Hidden));
		let input = facets(&[("color", &[("red", 3), ("blue", 1)]), ("size", &[("m", 1)])]);

		let options = OrderingOptions::default().with_facet_order_override(FacetsOrder::new(["size"]));
		let ordered = options.order(&ordering, &input);
		assert_eq!(attributes(&ordered), ["size", "color"]);
		assert_eq!(values(&ordered, "color"), ["blue"]);
	}

	#[test]
	fn responses_without_a_directive_yield_nothing() {
		let response =
			SearchResponse::new().with_facets(facets(&[("color", &[("red", 1)])]));
		assert!(OrderingOptions::default().ordered_facets(&response).is_empty());

		let response = SearchResponse::new().with_facet_ordering(FacetOrdering::default());
		assert!(OrderingOptions::default().ordered_facets(&response).is_empty());
	}

	#[test]
	fn disjunctive_facets_merge_only_when_enabled() {
		let response = SearchResponse::new()
			.with_facets(facets(&[("Y", &[("red", 3)])]))
			.with_disjunctive_facets(facets(&[("Y", &[("red", 9), ("blue", 2)])]))
			.with_facet_ordering(FacetOrdering::default());

		let disabled = OrderingOptions::default().ordered_facets(&response);
		assert_eq!(values(&disabled, "Y"), ["red"]);

		let enabled = OrderingOptions::default()
			.with_disjunctive_faceting(true)
			.ordered_facets(&response);
		assert_eq!(enabled[0].facets, [Facet::new("red", 3), Facet::new("blue", 2)]);
	}
}
