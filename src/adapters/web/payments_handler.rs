use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{
	InitiatePaymentRequest, PaymentResponse, VerificationStatusResponse,
	VerifyPaymentFilter,
};
use crate::infrastructure::gateway::http_payment_gateway::HttpPaymentGateway;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::infrastructure::queue::redis_notification_queue::NotificationQueue;
use crate::use_cases::dto::{InitiatePaymentCommand, VerifyPaymentCommand};
use crate::use_cases::initiate_payment::InitiatePaymentUseCase;
use crate::use_cases::verify_payment::{
	VerifyPaymentError, VerifyPaymentUseCase,
};

const DEFAULT_NOTIFICATION_EMAIL: &str = "user@example.com";

#[post("/payments/initiate")]
pub async fn initiate_payment(
	payload: web::Json<InitiatePaymentRequest>,
	initiate_payment_use_case: web::Data<
		InitiatePaymentUseCase<RedisPaymentRepository>,
	>,
) -> impl Responder {
	let command = InitiatePaymentCommand {
		booking_reference: payload.booking_reference.clone(),
		amount:            payload.amount,
	};

	match initiate_payment_use_case.execute(command).await {
		Ok(payment) => {
			info!("Payment initiated: {}", payment.booking_reference);
			HttpResponse::Created().json(PaymentResponse::from(payment))
		}
		Err(e) => {
			warn!("Error initiating payment: {e:?}");
			ApiError::InternalServerError.error_response()
		}
	}
}

#[get("/payments/verify")]
pub async fn verify_payment(
	filter: web::Query<VerifyPaymentFilter>,
	verify_payment_use_case: web::Data<
		VerifyPaymentUseCase<
			RedisPaymentRepository,
			HttpPaymentGateway,
			NotificationQueue,
		>,
	>,
) -> impl Responder {
	let command = VerifyPaymentCommand {
		tx_ref: filter.tx_ref.clone(),
		email:  filter
			.email
			.clone()
			.unwrap_or_else(|| DEFAULT_NOTIFICATION_EMAIL.to_string()),
	};

	match verify_payment_use_case.execute(command).await {
		Ok(result) => {
			info!("Payment {} verified: {}", filter.tx_ref, result.status);
			HttpResponse::Ok().json(VerificationStatusResponse {
				status: result.status,
			})
		}
		Err(VerifyPaymentError::NotFound) => {
			ApiError::PaymentNotFound.error_response()
		}
		Err(e) => {
			warn!("Error verifying payment {}: {e:?}", filter.tx_ref);
			ApiError::InternalServerError.error_response()
		}
	}
}
