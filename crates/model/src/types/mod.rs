//! Facet data and ordering directive types.

mod attribute;
mod facet;
mod ordering;
mod response;

pub use attribute::Attribute;
pub use facet::{AttributedFacets, Facet};
pub use ordering::{FacetOrdering, FacetValuesOrder, FacetsOrder, SortRule};
pub use response::{FacetsMap, MultiSearchResponse, RenderingContent, SearchResponse};
