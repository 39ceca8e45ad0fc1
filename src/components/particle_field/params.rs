//! Numeric tuning for particle fields and optional runtime overrides.
//!
//! Every call site picks a preset ([`FieldParams::section`] or
//! [`FieldParams::footer`]). A page can tweak presets without a rebuild by
//! embedding a JSON [`FieldConfig`] in the document, see `load_field_config`.

use std::collections::HashMap;

use serde::Deserialize;

/// Largest population a config may ask for. Links are computed pairwise.
pub const MAX_COUNT: usize = 400;
/// Ceiling for per-axis speed, in pixels per frame.
pub const MAX_SPEED: f64 = 50.0;
/// Ceiling for link radius and particle radii, in pixels.
pub const MAX_LENGTH: f64 = 10_000.0;

/// Population and motion parameters of one particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
	/// Number of particles. Fixed for the lifetime of a field.
	pub count: usize,
	/// Pairs closer than this (in pixels) are linked.
	pub link_radius: f64,
	/// Per-axis speed bound; velocity components are drawn from `[-speed, speed]`.
	pub speed: f64,
	/// Smallest particle radius (inclusive).
	pub size_min: f64,
	/// Largest particle radius (exclusive).
	pub size_max: f64,
}

impl FieldParams {
	/// Preset shared by the full-height page sections.
	pub fn section() -> Self {
		Self {
			count: 80,
			link_radius: 150.0,
			speed: 0.25,
			size_min: 1.0,
			size_max: 4.0,
		}
	}

	/// Sparser, slower preset for the footer.
	pub fn footer() -> Self {
		Self {
			count: 50,
			link_radius: 100.0,
			speed: 0.15,
			size_min: 1.0,
			size_max: 3.0,
		}
	}

	/// Applies overrides on top of these parameters.
	///
	/// Non-finite or negative numbers are ignored, values above the `MAX_*`
	/// ceilings are clamped, and the radius range is kept non-empty, so a bad
	/// config can never make sampling panic or the link pass stall.
	pub fn merged(mut self, overrides: &FieldOverrides) -> Self {
		let valid = |v: &f64| v.is_finite() && *v >= 0.0;

		if let Some(count) = overrides.count {
			self.count = count.min(MAX_COUNT);
		}
		if let Some(r) = overrides.link_radius.filter(valid) {
			self.link_radius = r.min(MAX_LENGTH);
		}
		if let Some(s) = overrides.speed.filter(valid) {
			self.speed = s.min(MAX_SPEED);
		}
		if let Some(v) = overrides.size_min.filter(valid) {
			self.size_min = v.min(MAX_LENGTH);
		}
		if let Some(v) = overrides.size_max.filter(valid) {
			self.size_max = v.min(MAX_LENGTH);
		}
		if self.size_max <= self.size_min {
			self.size_max = self.size_min + 1.0;
		}
		self
	}
}

/// Partial [`FieldParams`]; absent fields keep the preset value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOverrides {
	/// Overrides [`FieldParams::count`], capped at [`MAX_COUNT`].
	pub count: Option<usize>,
	/// Overrides [`FieldParams::link_radius`] (`linkRadius` in JSON).
	pub link_radius: Option<f64>,
	/// Overrides [`FieldParams::speed`], capped at [`MAX_SPEED`].
	pub speed: Option<f64>,
	/// Overrides [`FieldParams::size_min`] (`sizeMin` in JSON).
	pub size_min: Option<f64>,
	/// Overrides [`FieldParams::size_max`] (`sizeMax` in JSON).
	pub size_max: Option<f64>,
}

/// Page-level field configuration, keyed by section id.
///
/// ```json
/// { "sections": { "home": { "count": 120 } }, "footer": { "speed": 0.1 } }
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Applied to all sections before any per-section override.
	pub all: Option<FieldOverrides>,
	/// Per-section overrides, keyed by section element id.
	pub sections: HashMap<String, FieldOverrides>,
	/// Overrides for the footer field. `all` does not apply to it.
	pub footer: Option<FieldOverrides>,
}

impl FieldConfig {
	/// Resolves the parameters for a page section.
	pub fn for_section(&self, id: &str) -> FieldParams {
		let mut params = FieldParams::section();
		if let Some(all) = &self.all {
			params = params.merged(all);
		}
		if let Some(overrides) = self.sections.get(id) {
			params = params.merged(overrides);
		}
		params
	}

	/// Resolves the parameters for the footer.
	pub fn for_footer(&self) -> FieldParams {
		match &self.footer {
			Some(overrides) => FieldParams::footer().merged(overrides),
			None => FieldParams::footer(),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_config_yields_presets() {
		let config: FieldConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.for_section("home"), FieldParams::section());
		assert_eq!(config.for_footer(), FieldParams::footer());
	}

	#[test]
	fn section_overrides_apply_after_global_ones() {
		let config: FieldConfig = serde_json::from_str(
			r#"{
				"all": { "count": 60, "speed": 0.4 },
				"sections": { "skills": { "count": 30, "linkRadius": 90 } }
			}"#,
		)
		.unwrap();

		let skills = config.for_section("skills");
		assert_eq!(skills.count, 30);
		assert_eq!(skills.link_radius, 90.0);
		assert_eq!(skills.speed, 0.4);

		let about = config.for_section("about");
		assert_eq!(about.count, 60);
		assert_eq!(about.link_radius, 150.0);
	}

	#[test]
	fn footer_overrides_start_from_footer_preset() {
		let config: FieldConfig =
			serde_json::from_str(r#"{ "footer": { "count": 10 } }"#).unwrap();
		let footer = config.for_footer();
		assert_eq!(footer.count, 10);
		assert_eq!(footer.link_radius, 100.0);
	}

	#[test]
	fn oversized_values_are_clamped() {
		let config: FieldConfig = serde_json::from_str(
			r#"{ "all": { "count": 1000000, "speed": 1e308, "linkRadius": 1e300, "sizeMax": 1e308 } }"#,
		)
		.unwrap();
		let params = config.for_section("home");
		assert_eq!(params.count, MAX_COUNT);
		assert_eq!(params.speed, MAX_SPEED);
		assert_eq!(params.link_radius, MAX_LENGTH);
		assert_eq!(params.size_max, MAX_LENGTH);
	}

	#[test]
	fn huge_speed_override_spawns_without_panicking() {
		use rand::SeedableRng;
		use rand::rngs::SmallRng;

		use super::super::particles::ParticleField;

		let config: FieldConfig = serde_json::from_str(r#"{ "all": { "speed": 1e308 } }"#).unwrap();
		let mut rng = SmallRng::seed_from_u64(1);
		let field = ParticleField::new(&config.for_section("home"), 800.0, 600.0, &mut rng);
		assert!(field.particles().iter().all(|p| p.dx.abs() <= MAX_SPEED));
	}

	#[test]
	fn invalid_numbers_are_ignored() {
		let overrides = FieldOverrides {
			speed: Some(-1.0),
			link_radius: Some(f64::NAN),
			size_min: Some(5.0),
			size_max: Some(2.0),
			..Default::default()
		};
		let params = FieldParams::section().merged(&overrides);
		assert_eq!(params.speed, 0.25);
		assert_eq!(params.link_radius, 150.0);
		assert_eq!(params.size_min, 5.0);
		assert_eq!(params.size_max, 6.0);
	}
}
