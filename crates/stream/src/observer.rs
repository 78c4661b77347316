use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Opaque handle returned by [`Observer::subscribe`], used to cancel the
/// subscription later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
	/// Raw identifier, unique within the issuing observer.
	#[must_use]
	pub fn id(self) -> u64 {
		self.0
	}
}

struct Registry<T> {
	next_id: AtomicU64,
	handlers: Mutex<Vec<(SubscriptionToken, Handler<T>)>>,
}

/// Clonable registry of event handlers. Clones share the same handler list.
///
/// Handlers are captured by value and invoked in subscription order.
/// [`notify`](Self::notify) works on a snapshot of the handler list, so a
/// handler may subscribe or unsubscribe while an event is being dispatched;
/// the change takes effect from the next event.
pub struct Observer<T> {
	inner: Arc<Registry<T>>,
}

impl<T> Observer<T> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			inner: Arc::new(Registry {
				next_id: AtomicU64::new(1),
				handlers: Mutex::new(Vec::new()),
			}),
		}
	}

	fn handlers(&self) -> MutexGuard<'_, Vec<(SubscriptionToken, Handler<T>)>> {
		self.inner
			.handlers
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
	}

	/// Register `handler` and return the token that cancels it.
	pub fn subscribe(&self, handler: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionToken {
		let token = SubscriptionToken(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
		self.handlers().push((token, Arc::new(handler)));
		token
	}

	/// Remove the handler registered under `token`.
	///
	/// Returns `false` when the token is unknown or was already cancelled.
	pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
		let mut handlers = self.handlers();
		let before = handlers.len();
		handlers.retain(|(registered, _)| *registered != token);
		handlers.len() != before
	}

	/// Deliver `event` to every registered handler.
	pub fn notify(&self, event: &T) {
		let snapshot: Vec<Handler<T>> = self
			.handlers()
			.iter()
			.map(|(_, handler)| Arc::clone(handler))
			.collect();
		for handler in snapshot {
			handler(event);
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.handlers().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<T> Default for Observer<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for Observer<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> fmt::Debug for Observer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Observer")
			.field("handlers", &self.len())
			.finish()
	}
}
