use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Attribute, Facet, FacetOrdering};
use crate::wire;

/// Raw facet mapping as returned by a search. Iteration follows the order in
/// which attributes were received.
pub type FacetsMap = IndexMap<Attribute, Vec<Facet>>;

/// Presentation hints attached to a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderingContent {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub facet_ordering: Option<FacetOrdering>,
}

/// The parts of a single-index search response relevant to facet ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResponse {
	#[serde(with = "wire::optional_facets", skip_serializing_if = "Option::is_none")]
	pub facets: Option<FacetsMap>,
	/// Facets computed with the attribute's own refinements relaxed.
	#[serde(with = "wire::optional_facets", skip_serializing_if = "Option::is_none")]
	pub disjunctive_facets: Option<FacetsMap>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rendering_content: Option<RenderingContent>,
}

impl SearchResponse {
	/// Create an empty [`SearchResponse`].
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_facets(mut self, facets: FacetsMap) -> Self {
		self.facets = Some(facets);
		self
	}

	#[must_use]
	pub fn with_disjunctive_facets(mut self, facets: FacetsMap) -> Self {
		self.disjunctive_facets = Some(facets);
		self
	}

	/// Attach a facet ordering directive, creating the rendering content if needed.
	#[must_use]
	pub fn with_facet_ordering(mut self, ordering: FacetOrdering) -> Self {
		self.rendering_content
			.get_or_insert_with(RenderingContent::default)
			.facet_ordering = Some(ordering);
		self
	}

	/// Facet ordering directive carried by the response, if any.
	#[must_use]
	pub fn facet_ordering(&self) -> Option<&FacetOrdering> {
		self.rendering_content.as_ref()?.facet_ordering.as_ref()
	}
}

/// Response to a multi-index query. Facets and ordering come from the first
/// result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSearchResponse {
	pub results: Vec<SearchResponse>,
}

impl MultiSearchResponse {
	#[must_use]
	pub fn new(results: Vec<SearchResponse>) -> Self {
		Self { results }
	}

	#[must_use]
	pub fn facets(&self) -> Option<&FacetsMap> {
		self.results.first()?.facets.as_ref()
	}

	#[must_use]
	pub fn facet_ordering(&self) -> Option<&FacetOrdering> {
		self.results.first()?.facet_ordering()
	}
}
