//! Leptos component for the contact form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use super::form::{ContactForm, Field, SendError, SendStatus, Submission};
use super::mailer::{Mailer, MailtoMailer};

/// Sends a submission and logs how it went.
async fn deliver<M: Mailer>(mailer: &M, submission: Submission) -> Result<(), SendError> {
	let outcome = mailer.send(&submission).await;
	match &outcome {
		Ok(()) => info!("portfolio: contact message handed off"),
		Err(e) => warn!("portfolio: contact message not sent: {}", e),
	}
	outcome
}

/// Name, email and message inputs with a submit button and a status banner.
///
/// Submitting validates the fields, disables the button while the mailer
/// works, then shows the outcome. Failures mention `mailer.to` as a fallback.
#[component]
pub fn MessageForm(mailer: MailtoMailer) -> impl IntoView {
	let form = RwSignal::new(ContactForm::new());

	let value = move |field: Field| move || form.with(|f| f.value(field).to_string());
	let edit = move |field: Field| {
		move |ev: web_sys::Event| form.update(|f| f.set(field, event_target_value(&ev)))
	};

	let on_submit = move |ev: web_sys::SubmitEvent| {
		ev.prevent_default();
		let submission = match form.try_update(ContactForm::begin_send) {
			Some(Ok(submission)) => submission,
			Some(Err(e)) => {
				info!("portfolio: contact submit refused: {}", e);
				return;
			}
			None => return,
		};
		spawn_local(async move {
			let outcome = deliver(&mailer, submission).await;
			form.update(|f| f.finish(outcome));
		});
	};

	let banner = move || {
		form.with(|f| {
			let class = match f.status() {
				SendStatus::Sent => "form-status success",
				_ => "form-status error",
			};
			f.status_message(mailer.to)
				.map(|text| view! { <p class=class role="status">{text}</p> })
		})
	};
	let sending = move || form.with(ContactForm::is_sending);

	view! {
		<form class="contact-form" on:submit=on_submit>
			<label for="contact-name">"Nom complet"</label>
			<input
				type="text"
				id="contact-name"
				name="user_name"
				placeholder="Votre nom"
				prop:value=value(Field::Name)
				on:input=edit(Field::Name)
			/>
			<label for="contact-email">"Email"</label>
			<input
				type="email"
				id="contact-email"
				name="user_email"
				placeholder="votre@email.com"
				prop:value=value(Field::Email)
				on:input=edit(Field::Email)
			/>
			<label for="contact-message">"Message"</label>
			<textarea
				id="contact-message"
				name="message"
				rows="5"
				placeholder="Votre message..."
				prop:value=value(Field::Message)
				on:input=edit(Field::Message)
			></textarea>
			{banner}
			<button type="submit" disabled=sending>
				{move || if sending() { "Envoi en cours..." } else { "Envoyer le message" }}
			</button>
		</form>
	}
}
