//! Wiring between a results source, the facet list interactor and
//! presentation controllers.
//!
//! Every connection owns the [`SubscriptionToken`] returned when it
//! subscribed and hands it back on [`Connection::disconnect`]. Handlers
//! capture what they need by value; nothing is tied to object identity.

mod controller;
mod multi;
mod searcher;

use std::sync::Arc;

use facetlist_model::AttributedFacets;
use facetlist_stream::{ResultEvent, ResultsObservable, SubscriptionToken};

pub use controller::{ControllerConnection, DynamicFacetListController};
pub use multi::MultiSearcherConnection;
pub use searcher::SearcherConnection;

use crate::interactor::DynamicFacetListInteractor;
use crate::ordering::OrderingOptions;

/// A link that can be established and torn down.
///
/// Connecting an established link and disconnecting a torn-down one are
/// no-ops.
pub trait Connection {
	fn connect(&mut self);
	fn disconnect(&mut self);
	fn is_connected(&self) -> bool;
}

type Compute<R> = fn(&R, &OrderingOptions) -> Vec<AttributedFacets>;

/// Subscription shared by the searcher connections: recompute on results,
/// reset on errors.
struct FacetsSubscription<S: ResultsObservable> {
	interactor: Arc<DynamicFacetListInteractor>,
	searcher: S,
	options: OrderingOptions,
	token: Option<SubscriptionToken>,
	compute: Compute<S::Response>,
}

impl<S> FacetsSubscription<S>
where
	S: ResultsObservable,
	S::Response: 'static,
{
	fn new(
		interactor: Arc<DynamicFacetListInteractor>,
		searcher: S,
		options: OrderingOptions,
		compute: Compute<S::Response>,
	) -> Self {
		Self {
			interactor,
			searcher,
			options,
			token: None,
			compute,
		}
	}

	fn connect(&mut self, source: &'static str) {
		if self.token.is_some() {
			return;
		}

		let interactor = Arc::clone(&self.interactor);
		let options = self.options.clone();
		let compute = self.compute;
		let token = self.searcher.subscribe(move |event| match event {
			ResultEvent::Results(response) => {
				let ordered = compute(response, &options);
				if ordered.is_empty() {
					tracing::debug!(source, "no facets or ordering in response; clearing facet list");
				} else {
					tracing::trace!(source, attributes = ordered.len(), "ordered facets");
				}
				interactor.set_ordered_facets(ordered);
			}
			ResultEvent::Error(_) => {
				tracing::debug!(source, "search failed; clearing facet list");
				interactor.reset();
			}
		});

		tracing::debug!(source, token = token.id(), "connected searcher");
		self.token = Some(token);
	}

	fn disconnect(&mut self, source: &'static str) {
		if let Some(token) = self.token.take() {
			self.searcher.unsubscribe(token);
			tracing::debug!(source, token = token.id(), "disconnected searcher");
		}
	}
}
