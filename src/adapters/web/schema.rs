use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreateSessionRequest {
	/// Kept loose so a bad amount gets a domain message, not a serde one.
	#[serde(default)]
	pub amount: Option<Value>,
}

impl CreateSessionRequest {
	/// The amount as a whole number. Missing or `null` reads as 0 and is
	/// rejected downstream like 0; `15000.0` reads as 15000; integers past
	/// `i64` saturate so they fail the upper limit. `None` for anything that
	/// is not a whole number.
	pub fn whole_amount(&self) -> Option<i64> {
		match &self.amount {
			None | Some(Value::Null) => Some(0),
			Some(Value::Number(number)) => number
				.as_i64()
				.or_else(|| number.as_u64().map(|_| i64::MAX))
				.or_else(|| {
					number
						.as_f64()
						.filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
						.map(|f| f as i64)
				}),
			Some(_) => None,
		}
	}
}

/// The `{success, message?, data?}` envelope every endpoint answers with.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiResponse<T> {
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data:    Option<T>,
}

impl<T> ApiResponse<T> {
	pub fn data(data: T) -> Self {
		Self {
			success: true,
			message: None,
			data:    Some(data),
		}
	}

	pub fn with_message(message: impl Into<String>, data: Option<T>) -> Self {
		Self {
			success: true,
			message: Some(message.into()),
			data,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HealthResponse {
	pub status:    String,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
	/// Seconds since the server started.
	pub uptime:    f64,
}
