use std::sync::{Arc, Mutex};

use facetlist_model::{MultiSearchResponse, SearchResponse};
use facetlist_stream::ResultsObservable;

use crate::connection::{
	Connection, DynamicFacetListController, MultiSearcherConnection, SearcherConnection,
};
use crate::interactor::DynamicFacetListInteractor;
use crate::ordering::OrderingOptions;

/// Owns the connections of one dynamic facet list: a searcher feeding the
/// interactor and any number of controllers rendering it.
///
/// Dropping the connector disconnects everything it owns.
pub struct DynamicFacetListConnector<C: Connection> {
	interactor: Arc<DynamicFacetListInteractor>,
	searcher_connection: C,
	controller_connections: Vec<Box<dyn Connection + Send>>,
}

impl<S> DynamicFacetListConnector<SearcherConnection<S>>
where
	S: ResultsObservable<Response = SearchResponse>,
{
	/// Connect `interactor` to a single-index `searcher`.
	pub fn new(
		searcher: S,
		interactor: Arc<DynamicFacetListInteractor>,
		options: OrderingOptions,
	) -> Self {
		let searcher_connection = interactor.connect_searcher(searcher, options);
		Self::from_parts(interactor, searcher_connection)
	}
}

impl<S> DynamicFacetListConnector<MultiSearcherConnection<S>>
where
	S: ResultsObservable<Response = MultiSearchResponse>,
{
	/// Connect `interactor` to a multi-index `searcher`.
	pub fn multi(
		searcher: S,
		interactor: Arc<DynamicFacetListInteractor>,
		options: OrderingOptions,
	) -> Self {
		let searcher_connection = interactor.connect_multi_searcher(searcher, options);
		Self::from_parts(interactor, searcher_connection)
	}
}

impl<C: Connection> DynamicFacetListConnector<C> {
	fn from_parts(interactor: Arc<DynamicFacetListInteractor>, searcher_connection: C) -> Self {
		Self {
			interactor,
			searcher_connection,
			controller_connections: Vec::new(),
		}
	}

	#[must_use]
	pub fn interactor(&self) -> &Arc<DynamicFacetListInteractor> {
		&self.interactor
	}

	#[must_use]
	pub fn searcher_connection(&self) -> &C {
		&self.searcher_connection
	}

	/// Attach a controller and return a shared handle to it.
	pub fn connect_controller<K>(&mut self, controller: K) -> Arc<Mutex<K>>
	where
		K: DynamicFacetListController,
	{
		let connection = self.interactor.connect_controller(controller);
		let handle = connection.controller();
		self.controller_connections.push(Box::new(connection));
		handle
	}

	#[must_use]
	pub fn controller_count(&self) -> usize {
		self.controller_connections.len()
	}

	/// Re-establish every owned connection.
	pub fn connect(&mut self) {
		self.searcher_connection.connect();
		for connection in &mut self.controller_connections {
			connection.connect();
		}
	}

	/// Tear down every owned connection.
	pub fn disconnect(&mut self) {
		self.searcher_connection.disconnect();
		for connection in &mut self.controller_connections {
			connection.disconnect();
		}
	}

	#[must_use]
	pub fn is_connected(&self) -> bool {
		self.searcher_connection.is_connected()
	}
}

impl<C: Connection> Drop for DynamicFacetListConnector<C> {
	fn drop(&mut self) {
		self.disconnect();
	}
}
