pub mod booking;
pub mod gateway;
pub mod mailer;
pub mod notification;
pub mod payment;
pub mod queue;
pub mod repository;
