use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

use crate::domain::error::SessionError;
use crate::domain::session::SessionStatus;

#[derive(Serialize)]
struct ErrorResponse {
	success: bool,
	error:   String,
	#[serde(skip_serializing_if = "Option::is_none")]
	status:  Option<SessionStatus>,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("{message}")]
	BadClientDataError { message: String },
	#[display("Session not found.")]
	SessionNotFoundError,
	#[display("Endpoint not found.")]
	EndpointNotFoundError,
	#[display("{message}")]
	SessionStateError {
		message: String,
		status:  SessionStatus,
	},
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn bad_request(message: impl Into<String>) -> Self {
		ApiError::BadClientDataError {
			message: message.into(),
		}
	}

	fn session_status(&self) -> Option<SessionStatus> {
		match self {
			ApiError::SessionStateError { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				success: false,
				error:   self.to_string(),
				status:  self.session_status(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientDataError { .. } => StatusCode::BAD_REQUEST,
			ApiError::SessionNotFoundError => StatusCode::NOT_FOUND,
			ApiError::EndpointNotFoundError => StatusCode::NOT_FOUND,
			ApiError::SessionStateError { .. } => StatusCode::BAD_REQUEST,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<SessionError> for ApiError {
	fn from(e: SessionError) -> Self {
		match e {
			SessionError::NotFound { .. } => ApiError::SessionNotFoundError,
			SessionError::PaymentExpired => ApiError::SessionStateError {
				message: e.to_string(),
				status:  SessionStatus::Expired,
			},
			SessionError::InvalidState { status } => ApiError::SessionStateError {
				message: e.to_string(),
				status,
			},
			SessionError::Codec(_) => {
				log::error!("Failed to build QRIS payload: {e}");
				ApiError::InternalServerError
			}
			SessionError::AmountNotPositive |
			SessionError::AmountAboveLimit { .. } => {
				ApiError::bad_request(e.to_string())
			}
		}
	}
}
