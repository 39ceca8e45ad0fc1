//! Delivery of contact form submissions.

use std::future::{self, Future};

use super::form::{SendError, Submission};

/// Something that can deliver a [`Submission`].
pub trait Mailer {
	/// Sends one submission. Resolves once delivery succeeded or failed.
	fn send(&self, submission: &Submission) -> impl Future<Output = Result<(), SendError>>;
}

/// Hands the submission to the visitor's mail client through a `mailto:` link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MailtoMailer {
	/// Recipient address.
	pub to: &'static str,
}

impl MailtoMailer {
	/// The `mailto:` URL carrying a submission as subject and body.
	pub fn url(&self, submission: &Submission) -> String {
		let subject = format!("Contact portfolio - {}", submission.name);
		let body = format!(
			"{}\n\n{} <{}>",
			submission.message, submission.name, submission.email
		);
		format!(
			"mailto:{}?subject={}&body={}",
			self.to,
			encode_component(&subject),
			encode_component(&body)
		)
	}
}

impl Mailer for MailtoMailer {
	fn send(&self, submission: &Submission) -> impl Future<Output = Result<(), SendError>> {
		let outcome = match web_sys::window() {
			Some(window) => window
				.location()
				.set_href(&self.url(submission))
				.map_err(|e| SendError(format!("{e:?}"))),
			None => Err(SendError("no window".to_string())),
		};
		future::ready(outcome)
	}
}

/// Percent-encodes `s` the way `encodeURIComponent` does.
fn encode_component(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for byte in s.bytes() {
		match byte {
			b'A'..=b'Z'
			| b'a'..=b'z'
			| b'0'..=b'9'
			| b'-'
			| b'_'
			| b'.'
			| b'!'
			| b'~'
			| b'*'
			| b'\''
			| b'('
			| b')' => out.push(byte as char),
			_ => out.push_str(&format!("%{byte:02X}")),
		}
	}
	out
}
