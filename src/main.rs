use std::sync::Arc;

use qris_payment::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		qris_payment::infrastructure::config::settings::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
