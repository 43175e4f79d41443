use async_trait::async_trait;
use log::warn;
use reqwest::Client;

use crate::domain::gateway::{PaymentGateway, VerificationResponse};

/// Client for the external payment gateway's verification endpoint. The
/// gateway's answer is trusted as-is; there is no signature check.
#[derive(Clone)]
pub struct HttpPaymentGateway {
	http_client: Client,
	base_url:    String,
	secret:      Option<String>,
}

impl HttpPaymentGateway {
	pub fn new(
		http_client: Client,
		base_url: String,
		secret: Option<String>,
	) -> Self {
		Self {
			http_client,
			base_url,
			secret,
		}
	}
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
	async fn verify(
		&self,
		reference: &str,
	) -> Result<VerificationResponse, Box<dyn std::error::Error + Send>> {
		let verify_url = format!(
			"{}/transaction/verify/{}",
			self.base_url.trim_end_matches('/'),
			reference
		);

		let mut request = self.http_client.get(&verify_url);
		if let Some(secret) = &self.secret {
			request = request.bearer_auth(secret);
		}

		let resp = request
			.send()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		if !resp.status().is_success() {
			warn!(
				"Gateway returned non-success status for {}: {}",
				reference,
				resp.status()
			);
			return Ok(VerificationResponse::default());
		}

		// An unparseable body counts as a response with no status, which
		// the caller reads as a failed verification.
		let verification = resp
			.json::<VerificationResponse>()
			.await
			.unwrap_or_default();

		Ok(verification)
	}
}
