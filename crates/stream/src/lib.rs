//! Observable primitives for delivering search results to interested
//! parties.
//!
//! [`Observer`] is a clonable handler registry: subscribing returns a
//! [`SubscriptionToken`] that the caller keeps and hands back to cancel.
//! Results sources implement [`ResultsObservable`] and deliver a single
//! tagged [`ResultEvent`] carrying either a response or an error.
//!
//! [`Searcher`] is a concrete source backed by an [`mpsc`] channel so
//! background producers can report without touching subscriber state:
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use facetlist_stream::{ResultEvent, ResultsObservable, Searcher};
//!
//! let searcher = Searcher::<&'static str, String>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let token = searcher.subscribe(move |event: &ResultEvent<&'static str, String>| {
//!     if let ResultEvent::Results(response) = event {
//!         sink.lock().unwrap().push(*response);
//!     }
//! });
//!
//! let stream = searcher.stream();
//! std::thread::spawn(move || stream.send_results("hits")).join().unwrap();
//! searcher.pump();
//!
//! assert_eq!(*seen.lock().unwrap(), ["hits"]);
//! assert!(searcher.unsubscribe(token));
//! ```
//! [`mpsc`]: std::sync::mpsc

mod observer;
mod searcher;

pub use observer::{Observer, SubscriptionToken};
pub use searcher::{ResultsStream, Searcher};

/// Outcome of a search request as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultEvent<R, E> {
	Results(R),
	Error(E),
}

/// Message queued by a producer, tagged with the request it answers.
#[derive(Debug)]
pub struct StreamEnvelope<P> {
	/// Identifier correlating the message with a request.
	pub id: u64,
	/// Payload delivered to the consumer.
	pub payload: P,
}

/// A source of search results that notifies subscribers of every response
/// or error.
pub trait ResultsObservable {
	type Response;
	type Error;

	/// Register `handler` for all subsequent events.
	fn subscribe(
		&self,
		handler: impl Fn(&ResultEvent<Self::Response, Self::Error>) + Send + Sync + 'static,
	) -> SubscriptionToken;

	/// Cancel a subscription. Returns `false` if `token` was not registered.
	fn unsubscribe(&self, token: SubscriptionToken) -> bool;
}

impl<T: ResultsObservable + ?Sized> ResultsObservable for std::sync::Arc<T> {
	type Response = T::Response;
	type Error = T::Error;

	fn subscribe(
		&self,
		handler: impl Fn(&ResultEvent<Self::Response, Self::Error>) + Send + Sync + 'static,
	) -> SubscriptionToken {
		(**self).subscribe(handler)
	}

	fn unsubscribe(&self, token: SubscriptionToken) -> bool {
		(**self).unsubscribe(token)
	}
}
