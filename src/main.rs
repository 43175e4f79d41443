use std::sync::Arc;

use travel_booking_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		travel_booking_api::infrastructure::config::settings::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
