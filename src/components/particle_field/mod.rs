//! Animated particle-link background.
//!
//! A fixed population of dots drifts across a viewport-sized canvas, bouncing
//! off the edges. Every frame, dots closer than a link radius are joined by a
//! line whose opacity fades with distance.
//!
//! - [`ParticleField`] holds the population and the surface bounds
//! - [`render`] draws a field onto any [`Surface`]
//! - [`ParticleCanvas`] is the Leptos component driving it in the browser
//!
//! # Example
//!
//! ```ignore
//! use portfolio_particles::components::particle_field::{FieldParams, FieldStyle, ParticleCanvas};
//!
//! view! {
//!     <footer style="position: relative; overflow: hidden;">
//!         <ParticleCanvas params=FieldParams::footer() style=FieldStyle::footer() />
//!     </footer>
//! }
//! ```

mod animation;
mod component;
pub mod params;
mod particles;
mod render;
pub mod theme;

pub use animation::FieldAnimation;
pub use component::{CANVAS_STYLE, ParticleCanvas};
pub use params::{FieldConfig, FieldOverrides, FieldParams};
pub use particles::{Link, Particle, ParticleField, link_opacity};
pub use render::{Surface, render};
pub use theme::{Color, FieldStyle};
