use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use crate::adapters::web::bookings_handler::{
	create_booking, delete_booking, get_booking, list_bookings, update_booking,
};
use crate::adapters::web::payments_handler::{initiate_payment, verify_payment};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateway::http_payment_gateway::HttpPaymentGateway;
use crate::infrastructure::mail::smtp_mailer::SmtpMailer;
use crate::infrastructure::persistence::redis_booking_repository::RedisBookingRepository;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::infrastructure::queue::redis_notification_queue::NotificationQueue;
use crate::infrastructure::workers::notification_worker::notification_worker;
use crate::use_cases::create_booking::CreateBookingUseCase;
use crate::use_cases::initiate_payment::InitiatePaymentUseCase;
use crate::use_cases::send_notification::SendNotificationUseCase;
use crate::use_cases::verify_payment::VerifyPaymentUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let redis_client =
		redis::Client::open(config.redis_url.clone()).expect("Invalid Redis URL");
	let http_client = Client::new();

	let booking_repo = RedisBookingRepository::new(redis_client.clone());
	let payment_repo = RedisPaymentRepository::new(redis_client.clone());
	let notification_queue = NotificationQueue::new(redis_client.clone());
	let gateway = HttpPaymentGateway::new(
		http_client.clone(),
		config.payment_gateway_url.clone(),
		config.payment_gateway_secret.clone(),
	);
	let mailer = SmtpMailer::new(
		&config.smtp_relay,
		config.smtp_username.clone(),
		config.smtp_password.clone(),
	)
	.expect("Invalid SMTP relay");

	let create_booking_use_case = CreateBookingUseCase::new(
		booking_repo.clone(),
		notification_queue.clone(),
	);
	let initiate_payment_use_case =
		InitiatePaymentUseCase::new(payment_repo.clone());
	let verify_payment_use_case = VerifyPaymentUseCase::new(
		payment_repo.clone(),
		gateway,
		notification_queue.clone(),
	);
	let send_notification_use_case = SendNotificationUseCase::new(
		mailer,
		config.mail_sender.clone(),
		PathBuf::from(&config.email_log_path),
	);

	info!("Starting notification worker...");
	tokio::spawn(notification_worker(
		notification_queue.clone(),
		send_notification_use_case,
	));

	info!("Starting Actix-Web server on 0.0.0.0:8000...");
	let server_keepalive = config.server_keepalive;
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(booking_repo.clone()))
			.app_data(web::Data::new(create_booking_use_case.clone()))
			.app_data(web::Data::new(initiate_payment_use_case.clone()))
			.app_data(web::Data::new(verify_payment_use_case.clone()))
			.service(create_booking)
			.service(list_bookings)
			.service(get_booking)
			.service(update_booking)
			.service(delete_booking)
			.service(initiate_payment)
			.service(verify_payment)
	})
	.keep_alive(Duration::from_secs(server_keepalive))
	.bind(("0.0.0.0", 8000))?
	.run()
	.await
}
