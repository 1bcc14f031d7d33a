use std::time::Instant;

use actix_web::{HttpResponse, Responder, get, web};
use time::OffsetDateTime;

use crate::adapters::web::schema::HealthResponse;

/// When the server came up, for the uptime in health responses.
#[derive(Debug, Clone, Copy)]
pub struct ServerStartedAt(pub Instant);

impl ServerStartedAt {
	pub fn now() -> Self {
		Self(Instant::now())
	}
}

#[get("/api/health")]
pub async fn health(started_at: web::Data<ServerStartedAt>) -> impl Responder {
	HttpResponse::Ok().json(HealthResponse {
		status:    "OK".to_string(),
		timestamp: OffsetDateTime::now_utc(),
		uptime:    started_at.0.elapsed().as_secs_f64(),
	})
}
