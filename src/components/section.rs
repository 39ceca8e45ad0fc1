//! Full-height page section with its own particle background.

use leptos::prelude::*;

use super::particle_field::{FieldParams, FieldStyle, ParticleCanvas};

/// Inline style of a section: the positioned box its canvas is clipped to.
pub const SECTION_STYLE: &str = "position: relative; overflow: hidden; min-height: 100vh;";

/// Inline style of the footer: positioned like a section, as tall as its content.
pub const FOOTER_STYLE: &str = "position: relative; overflow: hidden;";

/// Inline style of the content layer, stacked above the canvas.
pub const CONTENT_STYLE: &str = "position: relative; z-index: 1;";

/// A page section with a particle background behind its content.
///
/// `id` is the anchor the header links to and the key looked up in the page's
/// field configuration.
#[component]
pub fn Section(
	id: &'static str,
	#[prop(default = FieldParams::section())] params: FieldParams,
	#[prop(default = "page-section")] class: &'static str,
	children: Children,
) -> impl IntoView {
	view! {
		<section id=id class=class style=SECTION_STYLE>
			<ParticleCanvas params=params style=FieldStyle::section() />
			<div class="section-content" style=CONTENT_STYLE>{children()}</div>
		</section>
	}
}
