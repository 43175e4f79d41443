use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::mailer::Mailer;

#[derive(Clone)]
pub struct SmtpMailer {
	transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
	pub fn new(
		relay: &str,
		username: Option<String>,
		password: Option<String>,
	) -> Result<Self, lettre::transport::smtp::Error> {
		let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)?;
		if let (Some(username), Some(password)) = (username, password) {
			builder = builder.credentials(Credentials::new(username, password));
		}

		Ok(Self {
			transport: builder.build(),
		})
	}
}

#[async_trait]
impl Mailer for SmtpMailer {
	async fn send(
		&self,
		subject: &str,
		body: &str,
		from: &str,
		to: &[String],
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let from_mailbox: Mailbox = from
			.parse()
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let mut builder = Message::builder().from(from_mailbox).subject(subject);
		for recipient in to {
			let to_mailbox: Mailbox = recipient
				.parse()
				.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;
			builder = builder.to(to_mailbox);
		}

		let email = builder
			.body(body.to_string())
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		self.transport
			.send(email)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}
}
