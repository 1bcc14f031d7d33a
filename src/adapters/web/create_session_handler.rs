use actix_web::{HttpResponse, post, web};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{ApiResponse, CreateSessionRequest};
use crate::infrastructure::persistence::in_memory_session_store::InMemorySessionStore;
use crate::use_cases::create_session::CreateSessionUseCase;
use crate::use_cases::dto::CreateSessionCommand;

const AMOUNT_NOT_WHOLE: &str = "Payment amount must be a whole number.";

#[post("/api/payment/create")]
pub async fn create_session(
	payload: web::Json<CreateSessionRequest>,
	create_session_use_case: web::Data<CreateSessionUseCase<InMemorySessionStore>>,
) -> Result<HttpResponse, ApiError> {
	let amount = payload
		.whole_amount()
		.ok_or_else(|| ApiError::bad_request(AMOUNT_NOT_WHOLE))?;
	let command = CreateSessionCommand { amount };

	let session = create_session_use_case.execute(command)?;

	Ok(HttpResponse::Created().json(ApiResponse::data(session)))
}
