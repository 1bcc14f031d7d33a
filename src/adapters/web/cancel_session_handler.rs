use actix_web::{HttpResponse, delete, web};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::ApiResponse;
use crate::domain::error::SessionError;
use crate::domain::session::SessionStatus;
use crate::infrastructure::persistence::in_memory_session_store::InMemorySessionStore;
use crate::use_cases::cancel_session::CancelSessionUseCase;

#[delete("/api/payment/{session_id}")]
pub async fn cancel_session(
	session_id: web::Path<String>,
	cancel_session_use_case: web::Data<CancelSessionUseCase<InMemorySessionStore>>,
) -> Result<HttpResponse, ApiError> {
	match cancel_session_use_case.execute(&session_id) {
		Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::with_message(
			"Payment session cancelled",
			None,
		))),
		Err(SessionError::InvalidState {
			status: SessionStatus::Paid,
		}) => Err(ApiError::bad_request(
			"Cannot cancel a payment that has already succeeded.",
		)),
		Err(e) => Err(e.into()),
	}
}
