//! Cooperative cancellation for self-rescheduling browser loops.

use std::cell::Cell;
use std::rc::Rc;

/// A stop flag shared between a running loop and the component that owns it.
///
/// Loops check [`is_cancelled`](Self::is_cancelled) before doing any work and
/// stop rescheduling themselves once it is set. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
	/// A flag that is not yet cancelled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Asks every holder of this flag to stop. Idempotent.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// Whether [`cancel`](Self::cancel) has been called on any clone.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}
