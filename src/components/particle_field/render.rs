//! Drawing a particle field onto a 2D surface.
//!
//! Each frame is drawn in two passes so that dots sit on top of links:
//! 1. Proximity links, alpha scaled by closeness
//! 2. Particle dots

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::theme::{Color, FieldStyle};

/// The 2D drawing operations a particle field needs.
pub trait Surface {
	/// Clears a `width` x `height` region anchored at the origin.
	fn clear(&self, width: f64, height: f64);
	/// Sets the color of subsequent lines.
	fn set_stroke(&self, color: Color);
	/// Sets the width of subsequent lines.
	fn set_line_width(&self, width: f64);
	/// Strokes a single segment.
	fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64);
	/// Sets the color of subsequent circles.
	fn set_fill(&self, color: Color);
	/// Fills a full circle centered on `(x, y)`.
	fn fill_circle(&self, x: f64, y: f64, radius: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn set_stroke(&self, color: Color) {
		self.set_stroke_style_str(&color.to_css());
	}

	fn set_line_width(&self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.stroke();
	}

	fn set_fill(&self, color: Color) {
		self.set_fill_style_str(&color.to_css());
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Clears the surface and draws the field's links and particles.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &S, style: &FieldStyle) {
	surface.clear(field.width(), field.height());
	draw_links(field, surface, style);
	draw_particles(field, surface, style);
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, surface: &S, style: &FieldStyle) {
	let ps = field.particles();
	surface.set_line_width(style.link_width);

	for link in field.links() {
		let (a, b) = (&ps[link.a], &ps[link.b]);
		surface.set_stroke(style.link_color.with_alpha(link.opacity));
		surface.line(a.x, a.y, b.x, b.y);
	}
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, surface: &S, style: &FieldStyle) {
	surface.set_fill(style.point_color);
	for p in field.particles() {
		surface.fill_circle(p.x, p.y, p.radius);
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;

	use pretty_assertions::assert_eq;

	use super::super::particles::Particle;
	use super::*;

	/// A drawing call captured by [`Recorder`].
	#[derive(Clone, Debug, PartialEq)]
	pub(crate) enum Op {
		Clear(f64, f64),
		Stroke(Color),
		LineWidth(f64),
		Line(f64, f64, f64, f64),
		Fill(Color),
		Circle(f64, f64, f64),
	}

	/// Surface that records calls instead of drawing.
	#[derive(Default)]
	pub(crate) struct Recorder {
		pub(crate) ops: RefCell<Vec<Op>>,
	}

	impl Recorder {
		pub(crate) fn take(&self) -> Vec<Op> {
			self.ops.take()
		}
	}

	impl Surface for Recorder {
		fn clear(&self, width: f64, height: f64) {
			self.ops.borrow_mut().push(Op::Clear(width, height));
		}
		fn set_stroke(&self, color: Color) {
			self.ops.borrow_mut().push(Op::Stroke(color));
		}
		fn set_line_width(&self, width: f64) {
			self.ops.borrow_mut().push(Op::LineWidth(width));
		}
		fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
			self.ops.borrow_mut().push(Op::Line(x1, y1, x2, y2));
		}
		fn set_fill(&self, color: Color) {
			self.ops.borrow_mut().push(Op::Fill(color));
		}
		fn fill_circle(&self, x: f64, y: f64, radius: f64) {
			self.ops.borrow_mut().push(Op::Circle(x, y, radius));
		}
	}

	fn dot(x: f64, y: f64, radius: f64) -> Particle {
		Particle {
			x,
			y,
			dx: 0.0,
			dy: 0.0,
			radius,
		}
	}

	#[test]
	fn frame_clears_then_draws_links_under_dots() {
		let field = ParticleField::from_particles(
			vec![dot(0.0, 0.0, 1.5), dot(100.0, 0.0, 3.0)],
			640.0,
			480.0,
			150.0,
		);
		let surface = Recorder::default();

		render(&field, &surface, &FieldStyle::section());

		assert_eq!(
			surface.take(),
			vec![
				Op::Clear(640.0, 480.0),
				Op::LineWidth(0.5),
				Op::Stroke(Color::WHITE.with_alpha(1.0 - 100.0 / 150.0)),
				Op::Line(0.0, 0.0, 100.0, 0.0),
				Op::Fill(Color::WHITE),
				Op::Circle(0.0, 0.0, 1.5),
				Op::Circle(100.0, 0.0, 3.0),
			]
		);
	}

	#[test]
	fn distant_particles_draw_no_lines() {
		let field = ParticleField::from_particles(
			vec![dot(0.0, 0.0, 1.0), dot(300.0, 300.0, 1.0)],
			640.0,
			480.0,
			100.0,
		);
		let surface = Recorder::default();

		render(&field, &surface, &FieldStyle::footer());

		let ops = surface.take();
		assert!(!ops.iter().any(|op| matches!(op, Op::Line(..))));
		assert_eq!(ops.iter().filter(|op| matches!(op, Op::Circle(..))).count(), 2);
	}
}
