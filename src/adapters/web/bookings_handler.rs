use actix_web::{
	HttpResponse, Responder, ResponseError, delete, get, post, put, web,
};
use log::{error, info, warn};
use uuid::Uuid;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{
	BookingResponse, CreateBookingRequest, UpdateBookingRequest,
};
use crate::domain::repository::BookingRepository;
use crate::infrastructure::persistence::redis_booking_repository::RedisBookingRepository;
use crate::infrastructure::queue::redis_notification_queue::NotificationQueue;
use crate::use_cases::create_booking::CreateBookingUseCase;
use crate::use_cases::dto::CreateBookingCommand;

#[post("/bookings")]
pub async fn create_booking(
	payload: web::Json<CreateBookingRequest>,
	create_booking_use_case: web::Data<
		CreateBookingUseCase<RedisBookingRepository, NotificationQueue>,
	>,
) -> impl Responder {
	let command = CreateBookingCommand {
		customer_email: payload.customer_email.clone(),
		listing:        payload.listing.clone(),
		start_date:     payload.start_date,
		end_date:       payload.end_date,
	};

	match create_booking_use_case.execute(command).await {
		Ok(booking) => {
			info!("Booking created and confirmation email queued: {}", booking.id);
			HttpResponse::Created().json(BookingResponse::from(booking))
		}
		Err(e) => {
			warn!("Error creating booking: {e:?}");
			ApiError::InternalServerError.error_response()
		}
	}
}

#[get("/bookings")]
pub async fn list_bookings(
	booking_repo: web::Data<RedisBookingRepository>,
) -> impl Responder {
	match booking_repo.find_all().await {
		Ok(bookings) => HttpResponse::Ok().json(
			bookings
				.into_iter()
				.map(BookingResponse::from)
				.collect::<Vec<_>>(),
		),
		Err(e) => {
			error!("Error listing bookings: {e:?}");
			ApiError::InternalServerError.error_response()
		}
	}
}

#[get("/bookings/{id}")]
pub async fn get_booking(
	id: web::Path<Uuid>,
	booking_repo: web::Data<RedisBookingRepository>,
) -> impl Responder {
	match booking_repo.find_by_id(&id).await {
		Ok(Some(booking)) => {
			HttpResponse::Ok().json(BookingResponse::from(booking))
		}
		Ok(None) => ApiError::BookingNotFound.error_response(),
		Err(e) => {
			error!("Error fetching booking {id}: {e:?}");
			ApiError::InternalServerError.error_response()
		}
	}
}

#[put("/bookings/{id}")]
pub async fn update_booking(
	id: web::Path<Uuid>,
	payload: web::Json<UpdateBookingRequest>,
	booking_repo: web::Data<RedisBookingRepository>,
) -> impl Responder {
	let booking = match booking_repo.find_by_id(&id).await {
		Ok(Some(booking)) => booking,
		Ok(None) => return ApiError::BookingNotFound.error_response(),
		Err(e) => {
			error!("Error fetching booking {id}: {e:?}");
			return ApiError::InternalServerError.error_response();
		}
	};

	let mut updated = booking;
	updated.listing = payload.listing.clone();
	updated.start_date = payload.start_date;
	updated.end_date = payload.end_date;
	if let Some(status) = &payload.status {
		updated.status = status.clone();
	}

	match booking_repo.save(updated.clone()).await {
		Ok(_) => HttpResponse::Ok().json(BookingResponse::from(updated)),
		Err(e) => {
			error!("Error updating booking {id}: {e:?}");
			ApiError::InternalServerError.error_response()
		}
	}
}

#[delete("/bookings/{id}")]
pub async fn delete_booking(
	id: web::Path<Uuid>,
	booking_repo: web::Data<RedisBookingRepository>,
) -> impl Responder {
	match booking_repo.delete(&id).await {
		Ok(true) => HttpResponse::NoContent().finish(),
		Ok(false) => ApiError::BookingNotFound.error_response(),
		Err(e) => {
			error!("Error deleting booking {id}: {e:?}");
			ApiError::InternalServerError.error_response()
		}
	}
}
