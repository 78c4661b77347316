use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};

use crate::{Observer, ResultEvent, ResultsObservable, StreamEnvelope, SubscriptionToken};

/// In-process results source.
///
/// Background producers obtain a [`ResultsStream`] per request and push
/// responses or errors through it; the owner calls [`pump`](Self::pump) to
/// deliver them to subscribers on its own thread. Only the most recent
/// request is delivered: envelopes for a request superseded by a later
/// [`stream`](Self::stream) call are discarded.
pub struct Searcher<R, E> {
	events: Observer<ResultEvent<R, E>>,
	tx: Sender<StreamEnvelope<ResultEvent<R, E>>>,
	rx: Mutex<Receiver<StreamEnvelope<ResultEvent<R, E>>>>,
	latest_request_id: Arc<AtomicU64>,
}

impl<R, E> Searcher<R, E> {
	#[must_use]
	pub fn new() -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			events: Observer::new(),
			tx,
			rx: Mutex::new(rx),
			latest_request_id: Arc::new(AtomicU64::new(0)),
		}
	}

	/// Start a new request and return the handle its producer reports through.
	pub fn stream(&self) -> ResultsStream<R, E> {
		let id = self.latest_request_id.fetch_add(1, Ordering::AcqRel) + 1;
		ResultsStream {
			tx: self.tx.clone(),
			id,
			latest_request_id: Arc::clone(&self.latest_request_id),
		}
	}

	/// Identifier of the most recent request.
	#[must_use]
	pub fn latest_request_id(&self) -> u64 {
		self.latest_request_id.load(Ordering::Acquire)
	}

	/// Deliver an event to subscribers immediately.
	pub fn emit(&self, event: ResultEvent<R, E>) {
		self.events.notify(&event);
	}

	/// Drain queued envelopes and deliver those belonging to the latest
	/// request. Returns how many events were delivered.
	pub fn pump(&self) -> usize {
		let mut delivered = 0;
		loop {
			let next = self
				.rx
				.lock()
				.unwrap_or_else(PoisonError::into_inner)
				.try_recv();
			let envelope = match next {
				Ok(envelope) => envelope,
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			};

			if is_superseded(envelope.id, &self.latest_request_id) {
				tracing::trace!(
					request = envelope.id,
					latest = self.latest_request_id(),
					"dropping superseded search event"
				);
				continue;
			}

			self.emit(envelope.payload);
			delivered += 1;
		}
		delivered
	}
}

impl<R, E> Default for Searcher<R, E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R, E> ResultsObservable for Searcher<R, E> {
	type Response = R;
	type Error = E;

	fn subscribe(
		&self,
		handler: impl Fn(&ResultEvent<R, E>) + Send + Sync + 'static,
	) -> SubscriptionToken {
		self.events.subscribe(handler)
	}

	fn unsubscribe(&self, token: SubscriptionToken) -> bool {
		self.events.unsubscribe(token)
	}
}

fn is_superseded(id: u64, latest_request_id: &AtomicU64) -> bool {
	latest_request_id.load(Ordering::Acquire) != id
}

/// Producer-side handle for a single request issued by a [`Searcher`].
pub struct ResultsStream<R, E> {
	tx: Sender<StreamEnvelope<ResultEvent<R, E>>>,
	id: u64,
	latest_request_id: Arc<AtomicU64>,
}

impl<R, E> ResultsStream<R, E> {
	/// Identifier of the request this handle reports for.
	#[must_use]
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Whether a newer request has been started since this one.
	#[must_use]
	pub fn is_superseded(&self) -> bool {
		is_superseded(self.id, &self.latest_request_id)
	}

	/// Queue a successful response. Returns `false` if the searcher is gone.
	pub fn send_results(&self, response: R) -> bool {
		self.send(ResultEvent::Results(response))
	}

	/// Queue an error. Returns `false` if the searcher is gone.
	pub fn send_error(&self, error: E) -> bool {
		self.send(ResultEvent::Error(error))
	}

	fn send(&self, event: ResultEvent<R, E>) -> bool {
		self.tx
			.send(StreamEnvelope {
				id: self.id,
				payload: event,
			})
			.is_ok()
	}
}

impl<R, E> Clone for ResultsStream<R, E> {
	fn clone(&self) -> Self {
		Self {
			tx: self.tx.clone(),
			id: self.id,
			latest_request_id: Arc::clone(&self.latest_request_id),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;

	fn recording(searcher: &Searcher<u32, String>) -> Arc<Mutex<Vec<ResultEvent<u32, String>>>> {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = Arc::clone(&seen);
		searcher.subscribe(move |event: &ResultEvent<u32, String>| {
			sink.lock().unwrap().push(event.clone());
		});
		seen
	}

	#[test]
	fn pump_delivers_queued_events_for_the_latest_request() {
		let searcher = Searcher::<u32, String>::new();
		let seen = recording(&searcher);

		let stream = searcher.stream();
		assert!(stream.send_results(1));
		assert!(stream.send_error("boom".into()));
		assert!(seen.lock().unwrap().is_empty());

		assert_eq!(searcher.pump(), 2);
		assert_eq!(
			*seen.lock().unwrap(),
			[ResultEvent::Results(1), ResultEvent::Error("boom".into())]
		);
	}

	#[test]
	fn pump_drops_events_from_superseded_requests() {
		let searcher = Searcher::<u32, String>::new();
		let seen = recording(&searcher);

		let stale = searcher.stream();
		let fresh = searcher.stream();
		assert!(stale.is_superseded());
		assert!(!fresh.is_superseded());

		stale.send_results(1);
		fresh.send_results(2);

		assert_eq!(searcher.pump(), 1);
		assert_eq!(*seen.lock().unwrap(), [ResultEvent::Results(2)]);
	}

	#[test]
	fn producers_on_other_threads_report_through_the_stream() {
		let searcher = Searcher::<u32, String>::new();
		let seen = recording(&searcher);

		let stream = searcher.stream();
		std::thread::spawn(move || {
			stream.send_results(42);
		})
		.join()
		.unwrap();

		searcher.pump();
		assert_eq!(*seen.lock().unwrap(), [ResultEvent::Results(42)]);
	}

	#[test]
	fn unsubscribed_handlers_are_not_called() {
		let searcher = Searcher::<u32, String>::new();
		let seen = Arc::new(Mutex::new(0));
		let sink = Arc::clone(&seen);
		let token = searcher.subscribe(move |_: &ResultEvent<u32, String>| {
			*sink.lock().unwrap() += 1;
		});

		assert!(searcher.unsubscribe(token));
		searcher.emit(ResultEvent::Results(3));
		assert_eq!(*seen.lock().unwrap(), 0);
	}
}
