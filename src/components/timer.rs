//! Ownership of the JS callbacks behind a self-rescheduling timeout.

/// Keeps the callbacks of a timer chain alive, and nothing older.
///
/// Each callback arms its successor while it is still running, so it cannot
/// be dropped at that point. Arming moves it to `finished`, and it is dropped
/// on the following arm, after it has returned. [`clear`](Self::clear) drops
/// everything on teardown.
#[derive(Debug)]
pub struct CallbackSlots<C> {
	current: Option<C>,
	finished: Option<C>,
	handle: Option<i32>,
}

impl<C> Default for CallbackSlots<C> {
	fn default() -> Self {
		Self {
			current: None,
			finished: None,
			handle: None,
		}
	}
}

impl<C> CallbackSlots<C> {
	/// Empty slots, nothing scheduled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores the next callback and returns it for registration.
	///
	/// Drops the callback from two arms ago.
	pub fn arm(&mut self, callback: C) -> &C {
		self.finished = self.current.take();
		self.handle = None;
		self.current.insert(callback)
	}

	/// Records the browser handle of the pending timeout.
	pub fn set_handle(&mut self, handle: i32) {
		self.handle = Some(handle);
	}

	/// Marks the pending timeout as fired; its handle is no longer valid.
	pub fn fired(&mut self) {
		self.handle = None;
	}

	/// Drops every stored callback and returns the handle still pending, if
	/// any, so the caller can cancel it.
	pub fn clear(&mut self) -> Option<i32> {
		self.current = None;
		self.finished = None;
		self.handle.take()
	}

	/// Number of callbacks currently held.
	pub fn len(&self) -> usize {
		self.current.is_some() as usize + self.finished.is_some() as usize
	}

	/// Whether no callback is held.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests {
	use std::rc::Rc;

	use super::*;

	#[test]
	fn rescheduling_keeps_at_most_two_callbacks() {
		let token = Rc::new(());
		let mut slots = CallbackSlots::new();
		for id in 0..50 {
			slots.fired();
			slots.arm(Rc::clone(&token));
			slots.set_handle(id);
		}
		assert_eq!(slots.len(), 2);
		assert_eq!(Rc::strong_count(&token), 3);
	}

	#[test]
	fn armed_callback_is_returned() {
		let mut slots = CallbackSlots::new();
		assert_eq!(*slots.arm(7), 7);
		assert_eq!(*slots.arm(8), 8);
	}

	#[test]
	fn clear_releases_callbacks_and_pending_handle() {
		let token = Rc::new(());
		let mut slots = CallbackSlots::new();
		slots.arm(Rc::clone(&token));
		slots.arm(Rc::clone(&token));
		slots.set_handle(42);

		assert_eq!(slots.clear(), Some(42));
		assert!(slots.is_empty());
		assert_eq!(Rc::strong_count(&token), 1);
		assert_eq!(slots.clear(), None);
	}

	#[test]
	fn fired_timeout_is_not_cancelled_again() {
		let mut slots = CallbackSlots::new();
		slots.arm(());
		slots.set_handle(3);
		slots.fired();
		assert_eq!(slots.clear(), None);
	}
}
