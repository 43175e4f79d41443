use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::redis::PAYMENT_KEY_PREFIX;

#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	fn payment_key(reference: &str) -> String {
		format!("{PAYMENT_KEY_PREFIX}:{reference}")
	}
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn save(
		&self,
		payment: Payment,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let serialized_payment = serde_json::to_string(&payment)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.set(
				Self::payment_key(&payment.booking_reference),
				serialized_payment,
			)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}

	async fn find_by_reference(
		&self,
		reference: &str,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let serialized_payment: Option<String> = con
			.get(Self::payment_key(reference))
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let Some(serialized_payment) = serialized_payment else {
			return Ok(None);
		};

		let payment: Payment = serde_json::from_str(&serialized_payment)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(Some(payment))
	}
}
