use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateBookingCommand {
	pub customer_email: String,
	pub listing:        String,
	pub start_date:     NaiveDate,
	pub end_date:       NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InitiatePaymentCommand {
	pub booking_reference: String,
	pub amount:            f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VerifyPaymentCommand {
	pub tx_ref: String,
	pub email:  String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VerifyPaymentResult {
	pub status: String,
}
