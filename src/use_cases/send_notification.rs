use std::path::PathBuf;

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::domain::mailer::Mailer;
use crate::domain::notification::Notification;

/// Executes the two email jobs of the notification dispatcher. The sender
/// address and the audit-log path are injected so tests can redirect them.
#[derive(Clone)]
pub struct SendNotificationUseCase<M: Mailer> {
	mailer:   M,
	sender:   String,
	log_path: PathBuf,
}

impl<M: Mailer> SendNotificationUseCase<M> {
	pub fn new(mailer: M, sender: String, log_path: PathBuf) -> Self {
		Self {
			mailer,
			sender,
			log_path,
		}
	}

	pub async fn execute(
		&self,
		notification: Notification,
	) -> Result<String, Box<dyn std::error::Error + Send>> {
		match notification {
			Notification::BookingConfirmation {
				to_email,
				booking_id,
			} => {
				let subject = format!("Booking Confirmation #{booking_id}");
				let message = format!(
					"Your booking with ID {booking_id} has been confirmed!"
				);

				self.mailer
					.send(&subject, &message, &self.sender, &[to_email.clone()])
					.await?;

				self.append_audit_line(&format!(
					"{} - Email sent to {} for booking {}\n",
					Utc::now().format("%Y-%m-%d %H:%M:%S%.6f"),
					to_email,
					booking_id
				))
				.await?;

				Ok(format!("Email sent to {to_email}"))
			}
			Notification::PaymentConfirmation {
				to_email,
				reference,
				amount,
				status,
			} => {
				let subject = format!("Payment {status} for {reference}");
				let message = format!(
					"Your payment of {amount} for booking {reference} is \
					 {status}."
				);

				self.mailer
					.send(&subject, &message, &self.sender, &[to_email.clone()])
					.await?;

				self.append_audit_line(&format!(
					"{} - Email sent to {} for payment {}\n",
					Utc::now().format("%Y-%m-%d %H:%M:%S%.6f"),
					to_email,
					reference
				))
				.await?;

				Ok(format!("Email sent to {to_email}"))
			}
		}
	}

	/// Appends one complete line in append mode. Concurrent workers may
	/// interleave lines in any order; no lock is taken.
	async fn append_audit_line(
		&self,
		line: &str,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut log_file = OpenOptions::new()
			.append(true)
			.create(true)
			.open(&self.log_path)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		log_file
			.write_all(line.as_bytes())
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}
}
