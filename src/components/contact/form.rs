//! Contact form state: field values, validation and send status.

use std::fmt;

/// Shown when a submit is attempted with an empty field.
pub const INCOMPLETE_MESSAGE: &str = "Veuillez remplir tous les champs";
/// Shown once a message has been handed off.
pub const SENT_MESSAGE: &str = "Message envoyé avec succès ! Je vous répondrai dès que possible.";

/// One of the form's inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	/// Sender's full name.
	Name,
	/// Sender's reply address.
	Email,
	/// Message body.
	Message,
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendStatus {
	/// Nothing submitted yet.
	#[default]
	Idle,
	/// A submission is in flight; further submits are refused.
	Sending,
	/// The last submission succeeded and the fields were cleared.
	Sent,
	/// The last submit was refused because a field was empty.
	Incomplete,
	/// The last submission failed; the fields are kept for a retry.
	Failed,
}

/// The values handed to a mailer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
	/// Sender's full name.
	pub name: String,
	/// Sender's reply address.
	pub email: String,
	/// Message body.
	pub message: String,
}

/// Why a submit was refused before anything was sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
	/// At least one field is empty.
	Incomplete,
	/// A previous submission has not finished yet.
	AlreadySending,
}

impl fmt::Display for ContactError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ContactError::Incomplete => write!(f, "a required field is empty"),
			ContactError::AlreadySending => write!(f, "a message is already being sent"),
		}
	}
}

impl std::error::Error for ContactError {}

/// A mailer could not deliver a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendError(pub String);

impl fmt::Display for SendError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "send failed: {}", self.0)
	}
}

impl std::error::Error for SendError {}

/// Values and status of the contact form.
///
/// A submit goes through [`begin_send`](Self::begin_send), which validates
/// and marks the form as sending, then [`finish`](Self::finish) with the
/// mailer's outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	name: String,
	email: String,
	message: String,
	status: SendStatus,
}

impl ContactForm {
	/// Empty, idle form.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current value of a field.
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Email => &self.email,
			Field::Message => &self.message,
		}
	}

	/// Replaces a field's value. The status is left as is.
	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		let slot = match field {
			Field::Name => &mut self.name,
			Field::Email => &mut self.email,
			Field::Message => &mut self.message,
		};
		*slot = value.into();
	}

	/// Current status.
	pub fn status(&self) -> SendStatus {
		self.status
	}

	/// Whether a submission is in flight.
	pub fn is_sending(&self) -> bool {
		self.status == SendStatus::Sending
	}

	/// Whether every field holds something.
	pub fn is_complete(&self) -> bool {
		!(self.name.is_empty() || self.email.is_empty() || self.message.is_empty())
	}

	/// Validates the fields and starts a submission.
	///
	/// While sending, the form is left untouched and the submit is refused. An
	/// incomplete form moves to [`SendStatus::Incomplete`].
	pub fn begin_send(&mut self) -> Result<Submission, ContactError> {
		if self.is_sending() {
			return Err(ContactError::AlreadySending);
		}
		if !self.is_complete() {
			self.status = SendStatus::Incomplete;
			return Err(ContactError::Incomplete);
		}
		self.status = SendStatus::Sending;
		Ok(Submission {
			name: self.name.clone(),
			email: self.email.clone(),
			message: self.message.clone(),
		})
	}

	/// Records the outcome of the submission started by `begin_send`.
	///
	/// Success clears the fields. Ignored when nothing is in flight.
	pub fn finish(&mut self, outcome: Result<(), SendError>) {
		if !self.is_sending() {
			return;
		}
		match outcome {
			Ok(()) => {
				self.name.clear();
				self.email.clear();
				self.message.clear();
				self.status = SendStatus::Sent;
			}
			Err(_) => self.status = SendStatus::Failed,
		}
	}

	/// Banner text for the current status, if any. Failures point the reader
	/// to `fallback_email`.
	pub fn status_message(&self, fallback_email: &str) -> Option<String> {
		match self.status {
			SendStatus::Idle | SendStatus::Sending => None,
			SendStatus::Sent => Some(SENT_MESSAGE.to_string()),
			SendStatus::Incomplete => Some(INCOMPLETE_MESSAGE.to_string()),
			SendStatus::Failed => Some(format!(
				"Erreur lors de l'envoi. Vous pouvez aussi m'envoyer un email directement à {fallback_email}"
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn filled() -> ContactForm {
		let mut form = ContactForm::new();
		form.set(Field::Name, "Ada");
		form.set(Field::Email, "ada@example.com");
		form.set(Field::Message, "Bonjour");
		form
	}

	#[test]
	fn empty_field_blocks_submit() {
		let mut form = filled();
		form.set(Field::Email, "");

		assert_eq!(form.begin_send(), Err(ContactError::Incomplete));
		assert_eq!(form.status(), SendStatus::Incomplete);
		assert_eq!(form.status_message("me@x").as_deref(), Some(INCOMPLETE_MESSAGE));
		assert_eq!(form.value(Field::Name), "Ada");
	}

	#[test]
	fn submit_hands_off_values_and_marks_sending() {
		let mut form = filled();
		let submission = form.begin_send().unwrap();

		assert_eq!(
			submission,
			Submission {
				name: "Ada".into(),
				email: "ada@example.com".into(),
				message: "Bonjour".into(),
			}
		);
		assert!(form.is_sending());
		assert_eq!(form.status_message("me@x"), None);
	}

	#[test]
	fn second_submit_while_sending_is_refused() {
		let mut form = filled();
		form.begin_send().unwrap();
		let before = form.clone();

		assert_eq!(form.begin_send(), Err(ContactError::AlreadySending));
		assert_eq!(form, before);
	}

	#[test]
	fn success_clears_fields() {
		let mut form = filled();
		form.begin_send().unwrap();
		form.finish(Ok(()));

		assert_eq!(form.status(), SendStatus::Sent);
		assert!(!form.is_complete());
		assert_eq!(form.value(Field::Message), "");
		assert_eq!(form.status_message("me@x").as_deref(), Some(SENT_MESSAGE));
	}

	#[test]
	fn failure_keeps_fields_for_retry() {
		let mut form = filled();
		form.begin_send().unwrap();
		form.finish(Err(SendError("offline".into())));

		assert_eq!(form.status(), SendStatus::Failed);
		assert_eq!(form.value(Field::Message), "Bonjour");
		let banner = form.status_message("me@example.com").unwrap();
		assert!(banner.starts_with("Erreur lors de l'envoi."));
		assert!(banner.ends_with("me@example.com"));

		assert!(form.begin_send().is_ok());
	}

	#[test]
	fn finish_without_submission_is_ignored() {
		let mut form = filled();
		form.finish(Ok(()));
		assert_eq!(form, filled());
	}
}
