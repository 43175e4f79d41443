use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub payment_gateway_url: String,
	pub payment_gateway_secret: Option<String>,
	pub smtp_relay: String,
	pub smtp_username: Option<String>,
	pub smtp_password: Option<String>,
	pub mail_sender: String,
	pub email_log_path: String,
	pub server_keepalive: u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
