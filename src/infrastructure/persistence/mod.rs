pub mod redis_booking_repository;
pub mod redis_payment_repository;
