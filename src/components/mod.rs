//! UI components.

mod cancel;
pub mod contact;
pub mod header;
pub mod particle_field;
mod section;
mod timer;
pub mod typewriter;

pub use cancel::CancelFlag;
pub use section::{CONTENT_STYLE, FOOTER_STYLE, SECTION_STYLE, Section};
pub use timer::CallbackSlots;
