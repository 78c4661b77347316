use std::convert::Infallible;
use std::sync::{Arc, PoisonError};

use anyhow::{Context, Result};
use facetlist::{
	AttributedFacets, Connection, DynamicFacetListConnector, DynamicFacetListController,
	DynamicFacetListInteractor, MultiSearchResponse, OrderingOptions, SearchResponse, Searcher,
};

/// Feeds a decoded response through a connector, the same path a live
/// searcher's results take.
pub(crate) struct OrderingWorkflow {
	options: OrderingOptions,
}

impl OrderingWorkflow {
	pub(crate) fn from_options(options: OrderingOptions) -> Self {
		Self { options }
	}

	/// Decode `input` and return the ordered facets it produces.
	pub(crate) fn run(&self, input: &str, multi: bool) -> Result<Vec<AttributedFacets>> {
		if multi {
			let response: MultiSearchResponse =
				serde_json::from_str(input).context("failed to parse multi-search response")?;
			Ok(self.order_multi(response))
		} else {
			let response: SearchResponse =
				serde_json::from_str(input).context("failed to parse search response")?;
			Ok(self.order_single(response))
		}
	}

	fn order_single(&self, response: SearchResponse) -> Vec<AttributedFacets> {
		let searcher = Arc::new(Searcher::<SearchResponse, Infallible>::new());
		let interactor = Arc::new(DynamicFacetListInteractor::new());
		let connector =
			DynamicFacetListConnector::new(Arc::clone(&searcher), interactor, self.options.clone());

		collect(connector, || {
			searcher.stream().send_results(response);
			searcher.pump();
		})
	}

	fn order_multi(&self, response: MultiSearchResponse) -> Vec<AttributedFacets> {
		let searcher = Arc::new(Searcher::<MultiSearchResponse, Infallible>::new());
		let interactor = Arc::new(DynamicFacetListInteractor::new());
		let connector = DynamicFacetListConnector::multi(
			Arc::clone(&searcher),
			interactor,
			self.options.clone(),
		);

		collect(connector, || {
			searcher.stream().send_results(response);
			searcher.pump();
		})
	}
}

#[derive(Default)]
struct CollectingController {
	latest: Vec<AttributedFacets>,
}

impl DynamicFacetListController for CollectingController {
	fn set_ordered_facets(&mut self, facets: &[AttributedFacets]) {
		self.latest = facets.to_vec();
	}
}

fn collect<C: Connection>(
	mut connector: DynamicFacetListConnector<C>,
	deliver: impl FnOnce(),
) -> Vec<AttributedFacets> {
	let controller = connector.connect_controller(CollectingController::default());
	deliver();
	connector.disconnect();

	let mut controller = controller.lock().unwrap_or_else(PoisonError::into_inner);
	std::mem::take(&mut controller.latest)
}
