use derive_more::derive::{Display, Error};

use crate::domain::qris::CodecError;
use crate::domain::session::SessionStatus;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
	#[display("Payment amount must be greater than 0.")]
	AmountNotPositive,
	#[display("Payment amount must not exceed {limit}.")]
	AmountAboveLimit { limit: String },
	#[display("Session {id} not found.")]
	NotFound { id: String },
	#[display("Session is not valid (status: {status}).")]
	InvalidState { status: SessionStatus },
	#[display("Payment time has expired.")]
	PaymentExpired,
	#[display("Could not build QRIS payload: {_0}")]
	Codec(CodecError),
}

impl SessionError {
	pub fn not_found(id: &str) -> Self {
		SessionError::NotFound { id: id.to_string() }
	}
}

impl From<CodecError> for SessionError {
	fn from(e: CodecError) -> Self {
		SessionError::Codec(e)
	}
}
