use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::payment::Payment;

#[async_trait]
pub trait BookingRepository: Send + Sync + 'static {
	async fn save(
		&self,
		booking: Booking,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
	async fn find_by_id(
		&self,
		id: &Uuid,
	) -> Result<Option<Booking>, Box<dyn std::error::Error + Send>>;
	async fn find_all(
		&self,
	) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send>>;
	async fn delete(
		&self,
		id: &Uuid,
	) -> Result<bool, Box<dyn std::error::Error + Send>>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	/// Saves unconditionally: the last writer wins, there is no
	/// optimistic-concurrency check on the row.
	async fn save(
		&self,
		payment: Payment,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
	async fn find_by_reference(
		&self,
		reference: &str,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>>;
}
