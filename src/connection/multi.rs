use std::sync::Arc;

use facetlist_model::MultiSearchResponse;
use facetlist_stream::ResultsObservable;

use super::{Connection, FacetsSubscription};
use crate::interactor::DynamicFacetListInteractor;
use crate::ordering::OrderingOptions;

const SOURCE: &str = "multi-search";

/// Connects a multi-index searcher to a [`DynamicFacetListInteractor`].
///
/// Facets and the ordering directive are taken from the first result of
/// each response; an empty response clears the list.
pub struct MultiSearcherConnection<S>
where
	S: ResultsObservable<Response = MultiSearchResponse>,
{
	subscription: FacetsSubscription<S>,
}

impl<S> MultiSearcherConnection<S>
where
	S: ResultsObservable<Response = MultiSearchResponse>,
{
	#[must_use]
	pub fn new(
		interactor: Arc<DynamicFacetListInteractor>,
		searcher: S,
		options: OrderingOptions,
	) -> Self {
		Self {
			subscription: FacetsSubscription::new(interactor, searcher, options, |response, options| {
				response
					.results
					.first()
					.map(|first| options.ordered_facets(first))
					.unwrap_or_default()
			}),
		}
	}

	#[must_use]
	pub fn interactor(&self) -> &Arc<DynamicFacetListInteractor> {
		&self.subscription.interactor
	}

	#[must_use]
	pub fn searcher(&self) -> &S {
		&self.subscription.searcher
	}
}

impl<S> Connection for MultiSearcherConnection<S>
where
	S: ResultsObservable<Response = MultiSearchResponse>,
{
	fn connect(&mut self) {
		self.subscription.connect(SOURCE);
	}

	fn disconnect(&mut self) {
		self.subscription.disconnect(SOURCE);
	}

	fn is_connected(&self) -> bool {
		self.subscription.token.is_some()
	}
}
