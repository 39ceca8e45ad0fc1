//! Frame-by-frame driver for a particle field.

use super::particles::ParticleField;
use super::render::{self, Surface};
use super::theme::FieldStyle;
use crate::components::cancel::CancelFlag;

/// Owns a field and its style, and advances it one display refresh at a time.
///
/// Created once per mounted background. The browser loop calls
/// [`frame`](Self::frame) from `requestAnimationFrame` and reschedules only
/// while it returns `true`.
pub struct FieldAnimation {
	field: ParticleField,
	style: FieldStyle,
	cancel: CancelFlag,
}

impl FieldAnimation {
	/// Wraps a freshly spawned field. The loop starts uncancelled.
	pub fn new(field: ParticleField, style: FieldStyle) -> Self {
		Self {
			field,
			style,
			cancel: CancelFlag::new(),
		}
	}

	/// Handle used by the owner to stop the loop on unmount.
	pub fn cancel_flag(&self) -> CancelFlag {
		self.cancel.clone()
	}

	/// The animated field, for inspection.
	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// Runs one tick: clear, links, particles, then advection.
	///
	/// Returns `false` without touching the surface or the field once
	/// cancelled, telling the caller not to schedule another frame.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &S) -> bool {
		if self.cancel.is_cancelled() {
			return false;
		}
		render::render(&self.field, surface, &self.style);
		self.field.advance();
		true
	}

	/// Follows a viewport resize. Ignored after cancellation.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.cancel.is_cancelled() {
			return;
		}
		self.field.resize(width, height);
	}
}
