//! Looping two-line typewriter sequence.

use std::time::Duration;

/// Delay after each name character.
pub const NAME_CHAR_DELAY: Duration = Duration::from_millis(120);
/// Pause between the finished name and the first title character.
pub const NAME_PAUSE: Duration = Duration::from_millis(500);
/// Delay after each title character.
pub const TITLE_CHAR_DELAY: Duration = Duration::from_millis(90);
/// How long both finished lines stay on screen before the loop restarts.
pub const HOLD: Duration = Duration::from_millis(2500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Name(usize),
	Pause,
	Title(usize),
	Hold,
}

/// Types a name, then a title, one character per step, and starts over.
///
/// Call [`step`](Self::step) to apply the next change; it returns how long to
/// wait before calling it again.
#[derive(Clone, Debug)]
pub struct Typewriter {
	name: String,
	title: String,
	name_shown: usize,
	title_shown: usize,
	phase: Phase,
}

/// The first `chars` characters of `s`, cut on a char boundary.
fn prefix(s: &str, chars: usize) -> &str {
	match s.char_indices().nth(chars) {
		Some((end, _)) => &s[..end],
		None => s,
	}
}

impl Typewriter {
	/// A sequence that starts with both lines empty.
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			name_shown: 0,
			title_shown: 0,
			phase: Phase::Name(0),
		}
	}

	/// Visible part of the name.
	pub fn name(&self) -> &str {
		prefix(&self.name, self.name_shown)
	}

	/// Visible part of the title.
	pub fn title(&self) -> &str {
		prefix(&self.title, self.title_shown)
	}

	/// Applies the next change and returns the delay before the following one.
	pub fn step(&mut self) -> Duration {
		match self.phase {
			Phase::Name(i) => {
				if i == 0 {
					self.title_shown = 0;
				}
				self.name_shown = i;
				self.phase = if i < self.name.chars().count() {
					Phase::Name(i + 1)
				} else {
					Phase::Pause
				};
				NAME_CHAR_DELAY
			}
			Phase::Pause => {
				self.phase = Phase::Title(0);
				NAME_PAUSE
			}
			Phase::Title(j) => {
				self.title_shown = j;
				self.phase = if j < self.title.chars().count() {
					Phase::Title(j + 1)
				} else {
					Phase::Hold
				};
				TITLE_CHAR_DELAY
			}
			Phase::Hold => {
				self.phase = Phase::Name(0);
				HOLD
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn types_name_then_title() {
		let mut tw = Typewriter::new("Ada", "Dev");
		let mut names = Vec::new();
		for _ in 0..4 {
			tw.step();
			names.push(tw.name().to_string());
		}
		assert_eq!(names, ["", "A", "Ad", "Ada"]);
		assert_eq!(tw.title(), "");

		assert_eq!(tw.step(), NAME_PAUSE);
		for expected in ["", "D", "De", "Dev"] {
			assert_eq!(tw.step(), TITLE_CHAR_DELAY);
			assert_eq!(tw.title(), expected);
		}
		assert_eq!(tw.name(), "Ada");
	}

	#[test]
	fn full_cycle_timing() {
		let mut tw = Typewriter::new("Ada", "Dev");
		let total: Duration = (0..4 + 1 + 4 + 1).map(|_| tw.step()).sum();
		assert_eq!(total, NAME_CHAR_DELAY * 4 + NAME_PAUSE + TITLE_CHAR_DELAY * 4 + HOLD);
	}

	#[test]
	fn loop_restarts_with_both_lines_cleared() {
		let mut tw = Typewriter::new("Ada", "Dev");
		for _ in 0..10 {
			tw.step();
		}
		assert_eq!((tw.name(), tw.title()), ("Ada", "Dev"));

		tw.step();
		assert_eq!((tw.name(), tw.title()), ("", ""));
	}

	#[test]
	fn prefixes_respect_multibyte_characters() {
		let mut tw = Typewriter::new("É", "Développeur");
		for _ in 0..3 {
			tw.step();
		}
		for _ in 0..3 {
			tw.step();
		}
		assert_eq!(tw.name(), "É");
		assert_eq!(tw.title(), "Dé");
	}
}
