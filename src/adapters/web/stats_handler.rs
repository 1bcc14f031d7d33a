use actix_web::{HttpResponse, Responder, get, web};

use crate::adapters::web::schema::ApiResponse;
use crate::infrastructure::persistence::in_memory_session_store::InMemorySessionStore;
use crate::use_cases::get_stats::GetStatsUseCase;

#[get("/api/stats")]
pub async fn stats(
	get_stats_use_case: web::Data<GetStatsUseCase<InMemorySessionStore>>,
) -> impl Responder {
	HttpResponse::Ok().json(ApiResponse::data(get_stats_use_case.execute()))
}
