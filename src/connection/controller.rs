use std::sync::{Arc, Mutex, PoisonError};

use facetlist_model::AttributedFacets;
use facetlist_stream::SubscriptionToken;

use super::Connection;
use crate::interactor::DynamicFacetListInteractor;

/// Presentation side of a dynamic facet list.
pub trait DynamicFacetListController: Send + 'static {
	/// Receive a complete, ready-to-render replacement of the facet list.
	fn set_ordered_facets(&mut self, facets: &[AttributedFacets]);
}

/// Forwards the interactor's facet list to a controller.
///
/// The controller receives the current list when the connection is
/// established and every replacement afterwards.
pub struct ControllerConnection<C: DynamicFacetListController> {
	interactor: Arc<DynamicFacetListInteractor>,
	controller: Arc<Mutex<C>>,
	token: Option<SubscriptionToken>,
}

impl<C: DynamicFacetListController> ControllerConnection<C> {
	#[must_use]
	pub fn new(interactor: Arc<DynamicFacetListInteractor>, controller: C) -> Self {
		Self {
			interactor,
			controller: Arc::new(Mutex::new(controller)),
			token: None,
		}
	}

	/// Shared handle to the connected controller.
	#[must_use]
	pub fn controller(&self) -> Arc<Mutex<C>> {
		Arc::clone(&self.controller)
	}
}

fn push<C: DynamicFacetListController>(controller: &Mutex<C>, facets: &[AttributedFacets]) {
	controller
		.lock()
		.unwrap_or_else(PoisonError::into_inner)
		.set_ordered_facets(facets);
}

impl<C: DynamicFacetListController> Connection for ControllerConnection<C> {
	fn connect(&mut self) {
		if self.token.is_some() {
			return;
		}

		let controller = Arc::clone(&self.controller);
		let token = self
			.interactor
			.subscribe_with_current(move |facets| push(&controller, facets));
		self.token = Some(token);
	}

	fn disconnect(&mut self) {
		if let Some(token) = self.token.take() {
			self.interactor.on_facets_changed().unsubscribe(token);
		}
	}

	fn is_connected(&self) -> bool {
		self.token.is_some()
	}
}

#[cfg(test)]
mod tests {
	use facetlist_model::Facet;

	use super::*;

	#[derive(Default)]
	struct RecordingController {
		updates: Vec<Vec<String>>,
	}

	impl DynamicFacetListController for RecordingController {
		fn set_ordered_facets(&mut self, facets: &[AttributedFacets]) {
			self.updates
				.push(facets.iter().map(|f| f.attribute.to_string()).collect());
		}
	}

	#[test]
	fn controller_receives_current_and_subsequent_lists() {
		let interactor = Arc::new(DynamicFacetListInteractor::with_ordered_facets(vec![
			AttributedFacets::new("color", vec![Facet::new("red", 1)]),
		]));
		let connection = interactor.connect_controller(RecordingController::default());

		interactor.set_ordered_facets(vec![
			AttributedFacets::new("size", Vec::new()),
			AttributedFacets::new("brand", Vec::new()),
		]);

		let controller = connection.controller();
		let recorded = controller.lock().unwrap();
		assert_eq!(
			recorded.updates,
			[vec!["color".to_string()], vec!["size".to_string(), "brand".to_string()]]
		);
	}

	#[test]
	fn disconnected_controllers_stop_receiving_updates() {
		let interactor = Arc::new(DynamicFacetListInteractor::new());
		let mut connection = interactor.connect_controller(RecordingController::default());
		connection.disconnect();

		interactor.set_ordered_facets(vec![AttributedFacets::new("size", Vec::new())]);

		assert_eq!(connection.controller().lock().unwrap().updates.len(), 1);
		assert!(!connection.is_connected());
	}
}
