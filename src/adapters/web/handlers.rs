use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use log::warn;

pub use crate::adapters::web::cancel_session_handler::cancel_session;
pub use crate::adapters::web::confirm_payment_handler::confirm_payment;
pub use crate::adapters::web::create_session_handler::create_session;
use crate::adapters::web::errors::ApiError;
pub use crate::adapters::web::health_handler::health;
pub use crate::adapters::web::session_status_handler::session_status;
pub use crate::adapters::web::stats_handler::stats;

/// Turns body extraction failures into the usual `{success: false}` 400.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
		warn!("Rejected request body for {}: {err}", req.path());
		ApiError::bad_request(format!("Invalid request body: {err}")).into()
	})
}

pub async fn not_found() -> HttpResponse {
	ApiError::EndpointNotFoundError.error_response()
}
