use serde::{Deserialize, Serialize};

/// A payment row correlated with the external gateway through
/// `booking_reference`. The status field is free text: "Pending" on
/// initiation, then "Completed" or "Failed" after verification.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Payment {
	pub booking_reference: String,
	pub amount:            f64,
	pub status:            String,
}
