use chrono::Utc;
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::notification::Notification;
use crate::domain::queue::{Message, Queue};
use crate::domain::repository::BookingRepository;
use crate::use_cases::dto::CreateBookingCommand;

#[derive(Clone)]
pub struct CreateBookingUseCase<R: BookingRepository, Q: Queue<Notification>> {
	booking_repo:       R,
	notification_queue: Q,
}

impl<R: BookingRepository, Q: Queue<Notification>> CreateBookingUseCase<R, Q> {
	pub fn new(booking_repo: R, notification_queue: Q) -> Self {
		Self {
			booking_repo,
			notification_queue,
		}
	}

	/// Persists the booking, then enqueues exactly one confirmation email
	/// job. The enqueue happens after the save so the job never refers to a
	/// booking that was not durably stored.
	pub async fn execute(
		&self,
		command: CreateBookingCommand,
	) -> Result<Booking, Box<dyn std::error::Error + Send>> {
		let booking = Booking {
			id:             Uuid::new_v4(),
			customer_email: command.customer_email,
			listing:        command.listing,
			start_date:     command.start_date,
			end_date:       command.end_date,
			status:         "Confirmed".to_string(),
			created_at:     Utc::now(),
		};

		self.booking_repo.save(booking.clone()).await?;

		let notification = Notification::BookingConfirmation {
			to_email:   booking.customer_email.clone(),
			booking_id: booking.id,
		};
		self.notification_queue
			.push(Message::with(Uuid::new_v4(), notification))
			.await?;

		Ok(booking)
	}
}
