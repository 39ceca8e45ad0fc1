//! portfolio-particles: a single-page portfolio with animated particle backgrounds.
//!
//! Every section of the page sits on top of its own particle-link canvas. The
//! particle field itself lives in [`components::particle_field`] and is
//! independent of the page; the rest of the crate is the page shell around it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

use components::contact::{MailtoMailer, MessageForm};
use components::header::Header;
use components::{CONTENT_STYLE, FOOTER_STYLE, Section};
use components::particle_field::{FieldConfig, FieldStyle, ParticleCanvas};
use components::typewriter::TypewriterHeading;

pub use components::particle_field::{FieldParams, ParticleField};

/// Owner name typed out in the hero section.
pub const OWNER_NAME: &str = "MAMIZARA Henri Canisius";
/// Job title typed out under the name.
pub const OWNER_TITLE: &str = "Développeur Web Full Stack";
/// Public contact address.
pub const CONTACT_EMAIL: &str = "mamizarahenricanisius.pro@gmail.com";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Parses a field configuration, falling back to the presets on malformed input.
pub fn parse_field_config(json: &str) -> FieldConfig {
	match serde_json::from_str::<FieldConfig>(json) {
		Ok(config) => {
			info!(
				"portfolio: loaded field config ({} section overrides)",
				config.sections.len()
			);
			config
		}
		Err(e) => {
			warn!("portfolio: failed to parse field config: {}", e);
			FieldConfig::default()
		}
	}
}

/// Load particle tuning from a script element with id="field-config".
/// Expected format: JSON, see [`FieldConfig`].
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	Some(parse_field_config(&json_text))
}

/// Main application component: header, the six page sections and the footer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let params = |id: &str| config.for_section(id);
	let mailto = format!("mailto:{CONTACT_EMAIL}");
	let mailer = MailtoMailer { to: CONTACT_EMAIL };

	view! {
		<Html attr:lang="fr" attr:dir="ltr" />
		<Title text=OWNER_NAME />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Header />
		<main>
			<Section id="home" params=params("home") class="page-section hero">
				<TypewriterHeading name=OWNER_NAME title=OWNER_TITLE />
				<a href="#contact" class="cta">"Contactez-moi"</a>
			</Section>
			<Section id="about" params=params("about")>
				<h2>"About"</h2>
			</Section>
			<Section id="skills" params=params("skills")>
				<h2>"Skills"</h2>
			</Section>
			<Section id="services" params=params("services")>
				<h2>"Services"</h2>
			</Section>
			<Section id="project" params=params("project")>
				<h2>"Projects"</h2>
			</Section>
			<Section id="contact" params=params("contact")>
				<h2>"Contactez-moi"</h2>
				<a href=mailto class="contact-email">{CONTACT_EMAIL}</a>
				<MessageForm mailer=mailer />
			</Section>
		</main>
		<footer class="site-footer" style=FOOTER_STYLE>
			<ParticleCanvas params=config.for_footer() style=FieldStyle::footer() />
			<p class="section-content" style=CONTENT_STYLE>{format!("\u{a9} {OWNER_NAME}")}</p>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_config_falls_back_to_presets() {
		let config = parse_field_config("{ not json");
		assert_eq!(config.for_section("home"), FieldParams::section());
		assert_eq!(config.for_footer(), FieldParams::footer());
	}

	#[test]
	fn config_overrides_reach_sections() {
		let config = parse_field_config(r#"{ "sections": { "contact": { "count": 12 } } }"#);
		assert_eq!(config.for_section("contact").count, 12);
		assert_eq!(config.for_section("home").count, 80);
	}
}
