pub mod bookings_handler;
pub mod errors;
pub mod payments_handler;
pub mod schema;
