use derive_more::derive::{Display, Error};
use uuid::Uuid;

use crate::domain::gateway::PaymentGateway;
use crate::domain::notification::Notification;
use crate::domain::queue::{Message, Queue};
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::{VerifyPaymentCommand, VerifyPaymentResult};

#[derive(Debug, Display, Error)]
pub enum VerifyPaymentError {
	#[display("Payment not found.")]
	NotFound,
	#[display("Gateway verification failed: {message}")]
	Gateway {
		#[error(not(source))]
		message: String,
	},
	#[display("Storage operation failed: {message}")]
	Storage {
		#[error(not(source))]
		message: String,
	},
	#[display("Could not enqueue confirmation email: {message}")]
	Enqueue {
		#[error(not(source))]
		message: String,
	},
}

#[derive(Clone)]
pub struct VerifyPaymentUseCase<
	R: PaymentRepository,
	G: PaymentGateway,
	Q: Queue<Notification>,
> {
	payment_repo:       R,
	gateway:            G,
	notification_queue: Q,
}

impl<R: PaymentRepository, G: PaymentGateway, Q: Queue<Notification>>
	VerifyPaymentUseCase<R, G, Q>
{
	pub fn new(payment_repo: R, gateway: G, notification_queue: Q) -> Self {
		Self {
			payment_repo,
			gateway,
			notification_queue,
		}
	}

	/// Looks up the payment by its gateway reference, asks the gateway for
	/// the verification result, and persists the new status unconditionally.
	/// A gateway response carrying anything other than a "success" status,
	/// including no status at all, marks the payment "Failed". There is no
	/// idempotency guard: re-verifying an already verified reference runs
	/// the same steps again and lands on the same status.
	pub async fn execute(
		&self,
		command: VerifyPaymentCommand,
	) -> Result<VerifyPaymentResult, VerifyPaymentError> {
		let payment = self
			.payment_repo
			.find_by_reference(&command.tx_ref)
			.await
			.map_err(|e| VerifyPaymentError::Storage {
				message: e.to_string(),
			})?;

		let Some(mut payment) = payment else {
			return Err(VerifyPaymentError::NotFound);
		};

		let response = self.gateway.verify(&command.tx_ref).await.map_err(|e| {
			VerifyPaymentError::Gateway {
				message: e.to_string(),
			}
		})?;

		let gateway_status = response.status_or_failed();
		payment.status = if gateway_status == "success" {
			"Completed".to_string()
		} else {
			"Failed".to_string()
		};

		self.payment_repo
			.save(payment.clone())
			.await
			.map_err(|e| VerifyPaymentError::Storage {
				message: e.to_string(),
			})?;

		let notification = Notification::PaymentConfirmation {
			to_email:  command.email,
			reference: command.tx_ref,
			amount:    payment.amount,
			status:    payment.status.clone(),
		};
		self.notification_queue
			.push(Message::with(Uuid::new_v4(), notification))
			.await
			.map_err(|e| VerifyPaymentError::Enqueue {
				message: e.to_string(),
			})?;

		Ok(VerifyPaymentResult {
			status: payment.status,
		})
	}
}
