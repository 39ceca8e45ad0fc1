//! Colors and stroke styling for particle fields.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 (transparent) to 1.0 (opaque).
	pub a: f64,
}

impl Color {
	/// Opaque white, the color of dots and links on the dark sections.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Opaque color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with a different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Renders the color as a CSS color string. Alpha is clamped to [0, 1].
	pub fn to_css(self) -> String {
		let a = self.a.clamp(0.0, 1.0);
		if (a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
		}
	}
}

/// Visual style of a particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	/// Fill color of the particle dots.
	pub point_color: Color,
	/// Base color of links. Its alpha is replaced per link by the proximity opacity.
	pub link_color: Color,
	/// Stroke width of links in pixels.
	pub link_width: f64,
}

impl FieldStyle {
	/// Style used behind full-height page sections.
	pub fn section() -> Self {
		Self {
			point_color: Color::WHITE,
			link_color: Color::WHITE,
			link_width: 0.5,
		}
	}

	/// Thinner links for the footer strip.
	pub fn footer() -> Self {
		Self {
			link_width: 0.3,
			..Self::section()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::WHITE.to_css(), "#ffffff");
		assert_eq!(Color::rgb(30, 58, 138).to_css(), "#1e3a8a");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(Color::WHITE.with_alpha(0.25).to_css(), "rgba(255, 255, 255, 0.25)");
	}

	#[test]
	fn alpha_is_clamped() {
		assert_eq!(Color::WHITE.with_alpha(-0.5).to_css(), "rgba(255, 255, 255, 0)");
		assert_eq!(Color::WHITE.with_alpha(3.0).to_css(), "#ffffff");
	}

	#[test]
	fn footer_only_thins_links() {
		let (section, footer) = (FieldStyle::section(), FieldStyle::footer());
		assert_eq!(footer.point_color, section.point_color);
		assert_eq!(footer.link_width, 0.3);
	}
}
