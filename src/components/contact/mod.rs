//! Contact form: validated submit with a pluggable mailer.

mod component;
mod form;
mod mailer;

pub use component::MessageForm;
pub use form::{
	ContactError, ContactForm, Field, INCOMPLETE_MESSAGE, SENT_MESSAGE, SendError, SendStatus,
	Submission,
};
pub use mailer::{Mailer, MailtoMailer};
