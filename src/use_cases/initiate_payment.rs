use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::InitiatePaymentCommand;

#[derive(Clone)]
pub struct InitiatePaymentUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> InitiatePaymentUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		command: InitiatePaymentCommand,
	) -> Result<Payment, Box<dyn std::error::Error + Send>> {
		let payment = Payment {
			booking_reference: command.booking_reference,
			amount:            command.amount,
			status:            "Pending".to_string(),
		};

		self.payment_repo.save(payment.clone()).await?;

		Ok(payment)
	}
}
