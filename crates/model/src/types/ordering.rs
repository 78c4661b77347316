use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Attribute;

/// How values not named in an explicit value order are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortRule {
	/// Descending by count, ties keep their input order.
	#[default]
	Count,
	/// Ascending by value string, ties keep their input order.
	Alpha,
	/// Dropped from the output.
	Hidden,
}

/// Desired top-level order of facet attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetsOrder {
	pub order: Vec<Attribute>,
}

impl FacetsOrder {
	#[must_use]
	pub fn new<I, A>(order: I) -> Self
	where
		I: IntoIterator<Item = A>,
		A: Into<Attribute>,
	{
		Self {
			order: order.into_iter().map(Into::into).collect(),
		}
	}
}

/// Value order for a single attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacetValuesOrder {
	/// Values placed first, in this exact sequence.
	pub order: Vec<String>,
	/// Policy for every value not listed in `order`.
	pub sort_remaining_by: SortRule,
}

impl FacetValuesOrder {
	#[must_use]
	pub fn new<I, V>(order: I, sort_remaining_by: SortRule) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<String>,
	{
		Self {
			order: order.into_iter().map(Into::into).collect(),
			sort_remaining_by,
		}
	}
}

/// Full ordering directive: attribute order plus per-attribute value orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetOrdering {
	pub facets: FacetsOrder,
	pub values: IndexMap<Attribute, FacetValuesOrder>,
}

impl FacetOrdering {
	#[must_use]
	pub fn new(facets: FacetsOrder) -> Self {
		Self {
			facets,
			values: IndexMap::new(),
		}
	}

	/// Register a value order for `attribute`, replacing any previous one.
	#[must_use]
	pub fn with_values(mut self, attribute: impl Into<Attribute>, order: FacetValuesOrder) -> Self {
		self.values.insert(attribute.into(), order);
		self
	}

	/// Replace the attribute order while keeping the value orders.
	#[must_use]
	pub fn with_facets_order(mut self, facets: FacetsOrder) -> Self {
		self.facets = facets;
		self
	}

	/// Look up the explicit value order configured for `attribute`.
	#[must_use]
	pub fn values_order(&self, attribute: &str) -> Option<&FacetValuesOrder> {
		self.values.get(attribute)
	}
}
