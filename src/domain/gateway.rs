use async_trait::async_trait;
use serde::Deserialize;

/// Shape of the gateway's verification response. Both levels are optional:
/// whatever the gateway returns is trusted as-is, and a missing status at
/// any level is later read as "failed".
#[derive(Debug, Deserialize, Clone, Default)]
pub struct VerificationResponse {
	#[serde(default)]
	pub data: Option<VerificationData>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VerificationData {
	#[serde(default)]
	pub status: Option<String>,
}

impl VerificationResponse {
	pub fn status_or_failed(self) -> String {
		self.data
			.and_then(|data| data.status)
			.unwrap_or_else(|| "failed".to_string())
	}
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn verify(
		&self,
		reference: &str,
	) -> Result<VerificationResponse, Box<dyn std::error::Error + Send>>;
}
