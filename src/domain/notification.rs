use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload of a background email job. Ephemeral: it only exists on the
/// notification queue, never in the store.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
	BookingConfirmation {
		to_email:   String,
		booking_id: Uuid,
	},
	PaymentConfirmation {
		to_email:  String,
		reference: String,
		amount:    f64,
		status:    String,
	},
}
