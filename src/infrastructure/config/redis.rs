pub const NOTIFICATIONS_QUEUE_KEY: &str = "notifications_queue";
pub const BOOKING_KEY_PREFIX: &str = "booking";
pub const BOOKINGS_INDEX_KEY: &str = "bookings";
pub const PAYMENT_KEY_PREFIX: &str = "payment";
