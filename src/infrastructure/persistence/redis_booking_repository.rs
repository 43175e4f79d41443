use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::repository::BookingRepository;
use crate::infrastructure::config::redis::{
	BOOKING_KEY_PREFIX, BOOKINGS_INDEX_KEY,
};

#[derive(Clone)]
pub struct RedisBookingRepository {
	client: Client,
}

impl RedisBookingRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	fn booking_key(id: &Uuid) -> String {
		format!("{BOOKING_KEY_PREFIX}:{id}")
	}
}

#[async_trait]
impl BookingRepository for RedisBookingRepository {
	async fn save(
		&self,
		booking: Booking,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let booking_id = booking.id.to_string();
		let serialized_booking = serde_json::to_string(&booking)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		redis::pipe()
			.atomic()
			.set(Self::booking_key(&booking.id), serialized_booking)
			.sadd(BOOKINGS_INDEX_KEY, booking_id)
			.query_async::<()>(&mut con)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(())
	}

	async fn find_by_id(
		&self,
		id: &Uuid,
	) -> Result<Option<Booking>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let serialized_booking: Option<String> = con
			.get(Self::booking_key(id))
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let Some(serialized_booking) = serialized_booking else {
			return Ok(None);
		};

		let booking: Booking = serde_json::from_str(&serialized_booking)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(Some(booking))
	}

	async fn find_all(
		&self,
	) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let ids: Vec<String> = con
			.smembers(BOOKINGS_INDEX_KEY)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let mut bookings = Vec::with_capacity(ids.len());
		for id in ids {
			let serialized_booking: Option<String> = con
				.get(format!("{BOOKING_KEY_PREFIX}:{id}"))
				.await
				.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

			// An id can linger in the index after its row expired or was
			// deleted concurrently; skip it.
			if let Some(serialized_booking) = serialized_booking {
				let booking: Booking = serde_json::from_str(&serialized_booking)
					.map_err(|e| {
						Box::new(e) as Box<dyn std::error::Error + Send>
					})?;
				bookings.push(booking);
			}
		}

		Ok(bookings)
	}

	async fn delete(
		&self,
		id: &Uuid,
	) -> Result<bool, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let (deleted, _removed_from_index): (i64, i64) = redis::pipe()
			.atomic()
			.del(Self::booking_key(id))
			.srem(BOOKINGS_INDEX_KEY, id.to_string())
			.query_async(&mut con)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(deleted > 0)
	}
}
