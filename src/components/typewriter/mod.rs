//! Hero heading that types itself out in a loop.

mod component;
mod state;

pub use component::TypewriterHeading;
pub use state::{HOLD, NAME_CHAR_DELAY, NAME_PAUSE, TITLE_CHAR_DELAY, Typewriter};
