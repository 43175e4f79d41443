use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::payment::Payment;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateBookingRequest {
	pub customer_email: String,
	pub listing:        String,
	pub start_date:     NaiveDate,
	pub end_date:       NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UpdateBookingRequest {
	pub listing:    String,
	pub start_date: NaiveDate,
	pub end_date:   NaiveDate,
	pub status:     Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingResponse {
	pub id:             Uuid,
	pub customer_email: String,
	pub listing:        String,
	pub start_date:     NaiveDate,
	pub end_date:       NaiveDate,
	pub status:         String,
	pub created_at:     DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
	fn from(booking: Booking) -> Self {
		Self {
			id:             booking.id,
			customer_email: booking.customer_email,
			listing:        booking.listing,
			start_date:     booking.start_date,
			end_date:       booking.end_date,
			status:         booking.status,
			created_at:     booking.created_at,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InitiatePaymentRequest {
	pub booking_reference: String,
	pub amount:            f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentResponse {
	pub booking_reference: String,
	pub amount:            f64,
	pub status:            String,
}

impl From<Payment> for PaymentResponse {
	fn from(payment: Payment) -> Self {
		Self {
			booking_reference: payment.booking_reference,
			amount:            payment.amount,
			status:            payment.status,
		}
	}
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyPaymentFilter {
	pub tx_ref: String,
	pub email:  Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VerificationStatusResponse {
	pub status: String,
}
