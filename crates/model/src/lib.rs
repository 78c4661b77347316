//! Data model shared by the facetlist crates: raw facets keyed by attribute,
//! the ordering directive a search service attaches to its responses, and
//! the ordered output handed to presentation code.

pub mod types;
pub mod wire;

pub use types::{
	Attribute, AttributedFacets, Facet, FacetOrdering, FacetValuesOrder, FacetsMap, FacetsOrder,
	MultiSearchResponse, RenderingContent, SearchResponse, SortRule,
};
