use std::sync::Arc;

use facetlist_model::SearchResponse;
use facetlist_stream::ResultsObservable;

use super::{Connection, FacetsSubscription};
use crate::interactor::DynamicFacetListInteractor;
use crate::ordering::OrderingOptions;

const SOURCE: &str = "search";

/// Connects a single-index searcher to a [`DynamicFacetListInteractor`].
///
/// Each response carrying both facets and a facet ordering directive
/// replaces the interactor's list with a freshly ordered one, after merging
/// disjunctive facets when [`OrderingOptions::disjunctive_faceting`] is set.
/// Responses missing either part, and errors, clear the list.
pub struct SearcherConnection<S>
where
	S: ResultsObservable<Response = SearchResponse>,
{
	subscription: FacetsSubscription<S>,
}

impl<S> SearcherConnection<S>
where
	S: ResultsObservable<Response = SearchResponse>,
{
	/// Create a disconnected connection.
	#[must_use]
	pub fn new(
		interactor: Arc<DynamicFacetListInteractor>,
		searcher: S,
		options: OrderingOptions,
	) -> Self {
		Self {
			subscription: FacetsSubscription::new(interactor, searcher, options, |response, options| {
				options.ordered_facets(response)
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

	#[must_use]
	pub fn options(&self) -> &OrderingOptions {
		&self.subscription.options
	}
}

impl<S> Connection for SearcherConnection<S>
where
	S: ResultsObservable<Response = SearchResponse>,
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

#[cfg(test)]
mod tests {
	use facetlist_model::{
		Facet, FacetOrdering, FacetValuesOrder, FacetsMap, FacetsOrder, SortRule,
	};
	use facetlist_stream::{ResultEvent, Searcher};

	use super::*;

	fn response() -> SearchResponse {
		let mut facets = FacetsMap::new();
		facets.insert("size".into(), vec![Facet::new("m", 4), Facet::new("s", 6)]);
		facets.insert("color".into(), vec![Facet::new("red", 3)]);
		let mut disjunctive = FacetsMap::new();
		disjunctive.insert("color".into(), vec![Facet::new("red", 9), Facet::new("blue", 2)]);

		let ordering = FacetOrdering::new(FacetsOrder::new(["color"]))
			.with_values("size", FacetValuesOrder::new(Vec::<String>::new(), SortRule::Count));

		SearchResponse::new()
			.with_facets(facets)
			.with_disjunctive_facets(disjunctive)
			.with_facet_ordering(ordering)
	}

	fn setup(
		options: OrderingOptions,
	) -> (
		Arc<Searcher<SearchResponse, String>>,
		Arc<DynamicFacetListInteractor>,
		SearcherConnection<Arc<Searcher<SearchResponse, String>>>,
	) {
		let searcher = Arc::new(Searcher::new());
		let interactor = Arc::new(DynamicFacetListInteractor::new());
		let connection = interactor.connect_searcher(Arc::clone(&searcher), options);
		(searcher, interactor, connection)
	}

	#[test]
	fn results_replace_the_ordered_facets() {
		let (searcher, interactor, connection) = setup(OrderingOptions::default());
		assert!(connection.is_connected());

		searcher.emit(ResultEvent::Results(response()));

		let facets = interactor.ordered_facets();
		let attributes: Vec<_> = facets.iter().map(|f| f.attribute.as_str()).collect();
		assert_eq!(attributes, ["color", "size"]);
		assert_eq!(facets[0].values().collect::<Vec<_>>(), ["red"]);
		assert_eq!(facets[1].values().collect::<Vec<_>>(), ["s", "m"]);
	}

	#[test]
	fn disjunctive_facets_are_merged_when_enabled() {
		let (searcher, interactor, _connection) =
			setup(OrderingOptions::default().with_disjunctive_faceting(true));

		searcher.emit(ResultEvent::Results(response()));

		let facets = interactor.ordered_facets();
		assert_eq!(facets[0].facets, [Facet::new("red", 3), Facet::new("blue", 2)]);
	}

	#[test]
	fn missing_directive_and_errors_clear_the_list() {
		let (searcher, interactor, _connection) = setup(OrderingOptions::default());

		searcher.emit(ResultEvent::Results(response()));
		assert!(!interactor.ordered_facets().is_empty());

		let mut without_directive = response();
		without_directive.rendering_content = None;
		searcher.emit(ResultEvent::Results(without_directive));
		assert!(interactor.ordered_facets().is_empty());

		searcher.emit(ResultEvent::Results(response()));
		searcher.emit(ResultEvent::Error("timeout".into()));
		assert!(interactor.ordered_facets().is_empty());
	}

	#[test]
	fn disconnected_connections_ignore_results() {
		let (searcher, interactor, mut connection) = setup(OrderingOptions::default());

		connection.disconnect();
		assert!(!connection.is_connected());
		connection.disconnect();

		searcher.emit(ResultEvent::Results(response()));
		assert!(interactor.ordered_facets().is_empty());
	}

	#[test]
	fn connecting_twice_subscribes_once() {
		let (searcher, _interactor, mut connection) = setup(OrderingOptions::default());
		connection.connect();

		let notified = Arc::new(std::sync::atomic::AtomicUsize::new(0));
		let counter = Arc::clone(&notified);
		connection
			.interactor()
			.on_facets_changed()
			.subscribe(move |_| {
				counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
			});

		searcher.emit(ResultEvent::Results(response()));
		assert_eq!(notified.load(std::sync::atomic::Ordering::SeqCst), 1);
	}
}
