use async_trait::async_trait;

#[async_trait]
pub trait Mailer: Send + Sync + 'static {
	async fn send(
		&self,
		subject: &str,
		body: &str,
		from: &str,
		to: &[String],
	) -> Result<(), Box<dyn std::error::Error + Send>>;
}
