#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use travel_booking_api::domain::booking::Booking;
use travel_booking_api::domain::gateway::{
	PaymentGateway, VerificationData, VerificationResponse,
};
use travel_booking_api::domain::mailer::Mailer;
use travel_booking_api::domain::notification::Notification;
use travel_booking_api::domain::payment::Payment;
use travel_booking_api::domain::queue::{Message, Queue};
use travel_booking_api::domain::repository::{
	BookingRepository, PaymentRepository,
};
use uuid::Uuid;

fn boxed_io_error(message: &str) -> Box<dyn std::error::Error + Send> {
	Box::new(std::io::Error::other(message.to_string()))
}

#[derive(Clone, Default)]
pub struct InMemoryNotificationQueue {
	messages: Arc<Mutex<VecDeque<Message<Notification>>>>,
	pushes:   Arc<AtomicUsize>,
	failing:  Arc<AtomicBool>,
}

impl InMemoryNotificationQueue {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_failing(&self, failing: bool) {
		self.failing.store(failing, Ordering::SeqCst);
	}

	pub fn len(&self) -> usize {
		self.messages.lock().unwrap().len()
	}

	pub fn push_count(&self) -> usize {
		self.pushes.load(Ordering::SeqCst)
	}

	pub fn snapshot(&self) -> Vec<Message<Notification>> {
		self.messages.lock().unwrap().iter().cloned().collect()
	}
}

#[async_trait]
impl Queue<Notification> for InMemoryNotificationQueue {
	async fn pop(
		&self,
	) -> Result<Option<Message<Notification>>, Box<dyn std::error::Error + Send>>
	{
		Ok(self.messages.lock().unwrap().pop_front())
	}

	async fn push(
		&self,
		message: Message<Notification>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		if self.failing.load(Ordering::SeqCst) {
			return Err(boxed_io_error("queue unavailable"));
		}
		self.pushes.fetch_add(1, Ordering::SeqCst);
		self.messages.lock().unwrap().push_back(message);
		Ok(())
	}
}

#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
	bookings: Arc<Mutex<HashMap<Uuid, Booking>>>,
}

impl InMemoryBookingRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, id: &Uuid) -> Option<Booking> {
		self.bookings.lock().unwrap().get(id).cloned()
	}

	pub fn len(&self) -> usize {
		self.bookings.lock().unwrap().len()
	}
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
	async fn save(
		&self,
		booking: Booking,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.bookings.lock().unwrap().insert(booking.id, booking);
		Ok(())
	}

	async fn find_by_id(
		&self,
		id: &Uuid,
	) -> Result<Option<Booking>, Box<dyn std::error::Error + Send>> {
		Ok(self.bookings.lock().unwrap().get(id).cloned())
	}

	async fn find_all(
		&self,
	) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send>> {
		Ok(self.bookings.lock().unwrap().values().cloned().collect())
	}

	async fn delete(
		&self,
		id: &Uuid,
	) -> Result<bool, Box<dyn std::error::Error + Send>> {
		Ok(self.bookings.lock().unwrap().remove(id).is_some())
	}
}

#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
	payments: Arc<Mutex<HashMap<String, Payment>>>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, payment: Payment) {
		self.payments
			.lock()
			.unwrap()
			.insert(payment.booking_reference.clone(), payment);
	}

	pub fn get(&self, reference: &str) -> Option<Payment> {
		self.payments.lock().unwrap().get(reference).cloned()
	}

	pub fn len(&self) -> usize {
		self.payments.lock().unwrap().len()
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn save(
		&self,
		payment: Payment,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.payments
			.lock()
			.unwrap()
			.insert(payment.booking_reference.clone(), payment);
		Ok(())
	}

	async fn find_by_reference(
		&self,
		reference: &str,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>> {
		Ok(self.payments.lock().unwrap().get(reference).cloned())
	}
}

#[derive(Debug, Clone)]
pub struct SentEmail {
	pub subject: String,
	pub body:    String,
	pub from:    String,
	pub to:      Vec<String>,
}

#[derive(Clone, Default)]
pub struct RecordingMailer {
	sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl RecordingMailer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn sent(&self) -> Vec<SentEmail> {
		self.sent.lock().unwrap().clone()
	}
}

#[async_trait]
impl Mailer for RecordingMailer {
	async fn send(
		&self,
		subject: &str,
		body: &str,
		from: &str,
		to: &[String],
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.sent.lock().unwrap().push(SentEmail {
			subject: subject.to_string(),
			body:    body.to_string(),
			from:    from.to_string(),
			to:      to.to_vec(),
		});
		Ok(())
	}
}

#[derive(Clone, Default)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
	async fn send(
		&self,
		_subject: &str,
		_body: &str,
		_from: &str,
		_to: &[String],
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		Err(boxed_io_error("smtp relay refused connection"))
	}
}

#[derive(Clone)]
pub struct StubPaymentGateway {
	// None means the gateway is unreachable and verify fails outright.
	response: Option<VerificationResponse>,
	calls:    Arc<Mutex<Vec<String>>>,
}

impl StubPaymentGateway {
	pub fn returning_status(status: &str) -> Self {
		Self {
			response: Some(VerificationResponse {
				data: Some(VerificationData {
					status: Some(status.to_string()),
				}),
			}),
			calls:    Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn returning_data_without_status() -> Self {
		Self {
			response: Some(VerificationResponse {
				data: Some(VerificationData { status: None }),
			}),
			calls:    Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn returning_empty() -> Self {
		Self {
			response: Some(VerificationResponse { data: None }),
			calls:    Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn unreachable() -> Self {
		Self {
			response: None,
			calls:    Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
	async fn verify(
		&self,
		reference: &str,
	) -> Result<VerificationResponse, Box<dyn std::error::Error + Send>> {
		self.calls.lock().unwrap().push(reference.to_string());
		match &self.response {
			Some(response) => Ok(response.clone()),
			None => Err(boxed_io_error("gateway connection refused")),
		}
	}
}
