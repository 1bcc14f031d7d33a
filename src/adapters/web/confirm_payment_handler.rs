use actix_web::{HttpResponse, post, web};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::ApiResponse;
use crate::infrastructure::persistence::in_memory_session_store::InMemorySessionStore;
use crate::use_cases::confirm_payment::ConfirmPaymentUseCase;

#[post("/api/payment/{session_id}/confirm")]
pub async fn confirm_payment(
	session_id: web::Path<String>,
	confirm_payment_use_case: web::Data<ConfirmPaymentUseCase<InMemorySessionStore>>,
) -> Result<HttpResponse, ApiError> {
	let session = confirm_payment_use_case.execute(&session_id)?;

	Ok(HttpResponse::Ok().json(ApiResponse::with_message(
		"Payment processed successfully",
		Some(session),
	)))
}
