use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Booking {
	pub id:             Uuid,
	pub customer_email: String,
	pub listing:        String,
	pub start_date:     NaiveDate,
	pub end_date:       NaiveDate,
	pub status:         String,
	pub created_at:     DateTime<Utc>,
}
