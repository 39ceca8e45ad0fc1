//! Which section the reader is looking at.

/// The header turns solid once the page scrolls past this many pixels.
pub const SCROLLED_THRESHOLD: f64 = 10.0;

/// Distance of the marker line from the top of the viewport, in pixels.
/// Roughly the header height.
pub const MARKER_OFFSET: f64 = 100.0;

/// Viewport-relative vertical extent of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds<'a> {
	/// Element id of the section.
	pub id: &'a str,
	/// Top edge relative to the viewport, negative once scrolled past.
	pub top: f64,
	/// Bottom edge relative to the viewport.
	pub bottom: f64,
}

/// Whether the page has scrolled far enough for the solid header.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_THRESHOLD
}

/// The first section, in page order, crossing the horizontal line at `marker`.
///
/// Returns `None` when no section crosses it (e.g. between sections with
/// margins); callers keep the previous active section in that case.
pub fn active_section<'a, I>(sections: I, marker: f64) -> Option<&'a str>
where
	I: IntoIterator<Item = SectionBounds<'a>>,
{
	sections
		.into_iter()
		.find(|s| s.top <= marker && s.bottom >= marker)
		.map(|s| s.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bounds(id: &str, top: f64, bottom: f64) -> SectionBounds<'_> {
		SectionBounds { id, top, bottom }
	}

	#[test]
	fn scrolled_only_past_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(10.0));
		assert!(is_scrolled(10.5));
	}

	#[test]
	fn picks_section_under_marker() {
		let sections = [
			bounds("home", -900.0, -100.0),
			bounds("about", -100.0, 700.0),
			bounds("skills", 700.0, 1500.0),
		];
		assert_eq!(active_section(sections, MARKER_OFFSET), Some("about"));
	}

	#[test]
	fn first_match_wins_on_shared_edge() {
		let sections = [bounds("home", -700.0, 100.0), bounds("about", 100.0, 900.0)];
		assert_eq!(active_section(sections, MARKER_OFFSET), Some("home"));
	}

	#[test]
	fn gap_under_marker_yields_none() {
		let sections = [bounds("skills", -800.0, 60.0), bounds("services", 140.0, 900.0)];
		assert_eq!(active_section(sections, MARKER_OFFSET), None);
	}
}
