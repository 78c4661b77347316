use std::sync::{Arc, Mutex, PoisonError, RwLock};

use facetlist_model::{AttributedFacets, MultiSearchResponse, SearchResponse};
use facetlist_stream::{Observer, ResultsObservable, SubscriptionToken};

use crate::connection::{
	Connection, ControllerConnection, DynamicFacetListController, MultiSearcherConnection,
	SearcherConnection,
};
use crate::ordering::OrderingOptions;

/// Immutable snapshot of the ordered facet list.
pub type FacetList = Arc<[AttributedFacets]>;

/// Holds the current ordered facet list and announces replacements.
///
/// The list is replaced wholesale on every update. Readers get an [`Arc`]
/// snapshot, so they observe either the previous list or the new one.
/// Updates are published one at a time: observers see lists in the order
/// they were stored, and the last list delivered is the stored one.
/// Observers must not call [`set_ordered_facets`](Self::set_ordered_facets)
/// from inside a notification.
#[derive(Debug)]
pub struct DynamicFacetListInteractor {
	ordered_facets: RwLock<FacetList>,
	on_facets_changed: Observer<FacetList>,
	publish: Mutex<()>,
}

impl DynamicFacetListInteractor {
	/// Create an interactor with an empty facet list.
	#[must_use]
	pub fn new() -> Self {
		Self::with_ordered_facets(Vec::new())
	}

	/// Create an interactor seeded with `facets`.
	#[must_use]
	pub fn with_ordered_facets(facets: Vec<AttributedFacets>) -> Self {
		Self {
			ordered_facets: RwLock::new(facets.into()),
			on_facets_changed: Observer::new(),
			publish: Mutex::new(()),
		}
	}

	/// Current ordered facets.
	#[must_use]
	pub fn ordered_facets(&self) -> FacetList {
		Arc::clone(
			&self
				.ordered_facets
				.read()
				.unwrap_or_else(PoisonError::into_inner),
		)
	}

	/// Replace the ordered facets and notify observers.
	pub fn set_ordered_facets(&self, facets: Vec<AttributedFacets>) {
		let facets: FacetList = facets.into();
		let _publishing = self.publish.lock().unwrap_or_else(PoisonError::into_inner);
		*self
			.ordered_facets
			.write()
			.unwrap_or_else(PoisonError::into_inner) = Arc::clone(&facets);
		self.on_facets_changed.notify(&facets);
	}

	/// Clear the ordered facets.
	pub fn reset(&self) {
		self.set_ordered_facets(Vec::new());
	}

	/// Hand `handler` the current list, then every later one.
	///
	/// No update can land between the two, so the handler never misses or
	/// reorders a list.
	pub(crate) fn subscribe_with_current(
		&self,
		handler: impl Fn(&FacetList) + Send + Sync + 'static,
	) -> SubscriptionToken {
		let _publishing = self.publish.lock().unwrap_or_else(PoisonError::into_inner);
		handler(&self.ordered_facets());
		self.on_facets_changed.subscribe(handler)
	}

	/// Observers invoked with each new list.
	#[must_use]
	pub fn on_facets_changed(&self) -> &Observer<FacetList> {
		&self.on_facets_changed
	}

	/// Keep this interactor up to date with a single-index searcher.
	#[must_use = "the connection must be kept to disconnect it later"]
	pub fn connect_searcher<S>(
		self: &Arc<Self>,
		searcher: S,
		options: OrderingOptions,
	) -> SearcherConnection<S>
	where
		S: ResultsObservable<Response = SearchResponse>,
	{
		let mut connection = SearcherConnection::new(Arc::clone(self), searcher, options);
		connection.connect();
		connection
	}

	/// Keep this interactor up to date with a multi-index searcher.
	#[must_use = "the connection must be kept to disconnect it later"]
	pub fn connect_multi_searcher<S>(
		self: &Arc<Self>,
		searcher: S,
		options: OrderingOptions,
	) -> MultiSearcherConnection<S>
	where
		S: ResultsObservable<Response = MultiSearchResponse>,
	{
		let mut connection = MultiSearcherConnection::new(Arc::clone(self), searcher, options);
		connection.connect();
		connection
	}

	/// Push every new list to `controller`.
	#[must_use = "the connection must be kept to disconnect it later"]
	pub fn connect_controller<C>(self: &Arc<Self>, controller: C) -> ControllerConnection<C>
	where
		C: DynamicFacetListController,
	{
		let mut connection = ControllerConnection::new(Arc::clone(self), controller);
		connection.connect();
		connection
	}
}

impl Default for DynamicFacetListInteractor {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::thread;
	use std::time::Duration;

	use facetlist_model::Facet;

	use super::*;

	#[test]
	fn replacing_the_list_notifies_observers() {
		let interactor = DynamicFacetListInteractor::new();
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = Arc::clone(&seen);
		interactor.on_facets_changed().subscribe(move |facets: &FacetList| {
			sink.lock().unwrap().push(facets.len());
		});

		interactor.set_ordered_facets(vec![AttributedFacets::new(
			"color",
			vec![Facet::new("red", 1)],
		)]);
		interactor.reset();

		assert_eq!(*seen.lock().unwrap(), [1, 0]);
		assert!(interactor.ordered_facets().is_empty());
	}

	#[test]
	fn snapshots_are_unaffected_by_later_updates() {
		let interactor =
			DynamicFacetListInteractor::with_ordered_facets(vec![AttributedFacets::new(
				"size",
				Vec::new(),
			)]);
		let before = interactor.ordered_facets();
		interactor.reset();

		assert_eq!(before.len(), 1);
		assert!(interactor.ordered_facets().is_empty());
	}

	#[test]
	fn concurrent_updates_leave_observers_on_the_stored_list() {
		let interactor = Arc::new(DynamicFacetListInteractor::new());
		let (entered_tx, entered_rx) = mpsc::channel();
		let (release_tx, release_rx) = mpsc::channel::<()>();
		let entered_tx = Mutex::new(entered_tx);
		let release_rx = Mutex::new(release_rx);
		let last_seen = Arc::new(Mutex::new(String::new()));
		let sink = Arc::clone(&last_seen);

		interactor.on_facets_changed().subscribe(move |facets: &FacetList| {
			let Some(first) = facets.first() else {
				return;
			};
			if first.attribute.as_str() == "old" {
				entered_tx.lock().unwrap().send(()).unwrap();
				release_rx.lock().unwrap().recv().unwrap();
			}
			*sink.lock().unwrap() = first.attribute.to_string();
		});

		let slow = {
			let interactor = Arc::clone(&interactor);
			thread::spawn(move || {
				interactor.set_ordered_facets(vec![AttributedFacets::new("old", Vec::new())]);
			})
		};
		entered_rx.recv().unwrap();

		let fast = {
			let interactor = Arc::clone(&interactor);
			thread::spawn(move || {
				interactor.set_ordered_facets(vec![AttributedFacets::new("new", Vec::new())]);
			})
		};
		thread::sleep(Duration::from_millis(50));
		release_tx.send(()).unwrap();
		slow.join().unwrap();
		fast.join().unwrap();

		assert_eq!(interactor.ordered_facets()[0].attribute.as_str(), "new");
		assert_eq!(*last_seen.lock().unwrap(), "new");
	}
}
