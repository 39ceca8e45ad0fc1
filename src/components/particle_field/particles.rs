//! Particle population, proximity links and boundary reflection.

use rand::Rng;

use super::params::{FieldParams, MAX_SPEED};

/// A single drifting dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub dx: f64,
	/// Vertical velocity, pixels per frame.
	pub dy: f64,
	/// Radius of the drawn dot.
	pub radius: f64,
}

/// A line between two particles closer than the link radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle, always lower than `b`.
	pub a: usize,
	/// Index of the second particle.
	pub b: usize,
	/// 1.0 when the particles coincide, approaching 0.0 at the link radius.
	pub opacity: f64,
}

/// Opacity of a link between two points `distance` apart, or `None` if they
/// are too far apart to be linked.
pub fn link_opacity(distance: f64, link_radius: f64) -> Option<f64> {
	(distance < link_radius).then(|| 1.0 - distance / link_radius)
}

/// Samples uniformly from `[lo, hi)`, collapsing to `lo` for an empty or
/// unrepresentable range.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo && (hi - lo).is_finite() {
		rng.gen_range(lo..hi)
	} else {
		lo
	}
}

/// The owned animation state of one background: a fixed population of
/// particles bouncing inside a resizable surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	link_radius: f64,
}

impl ParticleField {
	/// Spawns `params.count` particles spread uniformly over the surface.
	///
	/// The speed bound is clamped to `[0, MAX_SPEED]`; a non-finite one
	/// yields motionless particles.
	pub fn new<R: Rng + ?Sized>(params: &FieldParams, width: f64, height: f64, rng: &mut R) -> Self {
		let speed = if params.speed.is_finite() {
			params.speed.abs().min(MAX_SPEED)
		} else {
			0.0
		};
		let particles = (0..params.count)
			.map(|_| Particle {
				x: sample(rng, 0.0, width),
				y: sample(rng, 0.0, height),
				dx: rng.gen_range(-speed..=speed),
				dy: rng.gen_range(-speed..=speed),
				radius: sample(rng, params.size_min, params.size_max),
			})
			.collect();

		Self::from_particles(particles, width, height, params.link_radius)
	}

	/// Builds a field from an explicit population.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64, link_radius: f64) -> Self {
		Self {
			particles,
			width,
			height,
			link_radius,
		}
	}

	/// The population, in spawn order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the field has no particles and so never draws anything.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Current surface width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Updates the surface bounds. Particles keep their position and velocity;
	/// any now outside the bounds turn around at the next [`advance`](Self::advance).
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// All links for the current positions, each unordered pair visited once.
	///
	/// Quadratic in the population size, fine for the few dozen particles a
	/// background uses.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		let ps = &self.particles;
		(0..ps.len()).flat_map(move |a| {
			(a + 1..ps.len()).filter_map(move |b| {
				let (ddx, ddy) = (ps[a].x - ps[b].x, ps[a].y - ps[b].y);
				let distance = (ddx * ddx + ddy * ddy).sqrt();
				link_opacity(distance, self.link_radius).map(|opacity| Link { a, b, opacity })
			})
		})
	}

	/// Moves every particle by its velocity, then reverses each velocity
	/// component whose axis left `[0, width]` or `[0, height]`.
	pub fn advance(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.x += p.dx;
			p.y += p.dy;

			if p.x < 0.0 || p.x > w {
				p.dx = -p.dx;
			}
			if p.y < 0.0 || p.y > h {
				p.dy = -p.dy;
			}
		}
	}
}
