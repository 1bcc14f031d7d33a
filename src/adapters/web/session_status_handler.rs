use actix_web::{HttpResponse, get, web};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::ApiResponse;
use crate::infrastructure::persistence::in_memory_session_store::InMemorySessionStore;
use crate::use_cases::get_session::GetSessionUseCase;

#[get("/api/payment/{session_id}")]
pub async fn session_status(
	session_id: web::Path<String>,
	get_session_use_case: web::Data<GetSessionUseCase<InMemorySessionStore>>,
) -> Result<HttpResponse, ApiError> {
	let view = get_session_use_case.execute(&session_id)?;

	Ok(HttpResponse::Ok().json(ApiResponse::data(view)))
}
