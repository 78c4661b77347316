//! Ordered facet lists for search interfaces.
//!
//! The heart of the crate is [`FacetsOrderer`], a pure function from a raw
//! attribute → values mapping and a [`FacetOrdering`] directive to the list
//! of [`AttributedFacets`] a facet panel renders. Around it sit the pieces
//! that keep such a list current: a [`DynamicFacetListInteractor`] holding
//! the latest list, connections subscribing it to a results source and
//! pushing it to controllers, and a [`DynamicFacetListConnector`] owning the
//! lot.

pub mod app_dirs;
pub mod connection;
mod connector;
pub mod error;
mod interactor;
pub mod logging;
pub mod ordering;
pub mod settings;

pub use connection::{
	Connection, ControllerConnection, DynamicFacetListController, MultiSearcherConnection,
	SearcherConnection,
};
pub use connector::DynamicFacetListConnector;
pub use error::SettingsError;
pub use interactor::{DynamicFacetListInteractor, FacetList};
pub use ordering::{FacetsOrderer, OrderingOptions, UnlistedValues, merge_disjunctive, order_facets};
pub use settings::{Settings, SettingsLoader};

pub use facetlist_model::{
	Attribute, AttributedFacets, Facet, FacetOrdering, FacetValuesOrder, FacetsMap, FacetsOrder,
	MultiSearchResponse, RenderingContent, SearchResponse, SortRule,
};
pub use facetlist_stream::{
	Observer, ResultEvent, ResultsObservable, ResultsStream, Searcher, SubscriptionToken,
};
