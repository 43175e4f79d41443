pub mod create_booking;
pub mod dto;
pub mod initiate_payment;
pub mod send_notification;
pub mod verify_payment;
