use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::domain::merchant::MerchantProfile;

pub const DEFAULT_SESSION_TTL: Duration = Duration::seconds(60);
pub const DEFAULT_MAX_AMOUNT: u64 = 10_000_000;

const ID_PREFIX: &str = "PAY";
const ID_RANDOM_LEN: usize = 9;

#[derive(
	Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
	#[display("active")]
	Active,
	#[display("paid")]
	Paid,
	#[display("expired")]
	Expired,
	#[display("cancelled")]
	Cancelled,
}

/// Limits applied to every new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
	pub ttl:        Duration,
	pub max_amount: u64,
}

impl Default for SessionPolicy {
	fn default() -> Self {
		Self {
			ttl:        DEFAULT_SESSION_TTL,
			max_amount: DEFAULT_MAX_AMOUNT,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	pub id:                String,
	pub qr_payload:        String,
	pub status:            SessionStatus,
	pub amount:            u64,
	pub merchant_name:     String,
	pub merchant_location: String,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at:        OffsetDateTime,
	#[serde(with = "time::serde::rfc3339")]
	pub expires_at:        OffsetDateTime,
	pub expires_in:        i64,
	#[serde(
		with = "time::serde::rfc3339::option",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub paid_at:           Option<OffsetDateTime>,
	#[serde(
		with = "time::serde::rfc3339::option",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub cancelled_at:      Option<OffsetDateTime>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub payment_method:    Option<String>,
}

impl Session {
	pub fn open(
		id: String,
		amount: u64,
		qr_payload: String,
		merchant: &MerchantProfile,
		now: OffsetDateTime,
		ttl: Duration,
	) -> Self {
		Self {
			id,
			qr_payload,
			status: SessionStatus::Active,
			amount,
			merchant_name: merchant.name.clone(),
			merchant_location: merchant.location.clone(),
			created_at: now,
			expires_at: now + ttl,
			expires_in: ttl.whole_seconds(),
			paid_at: None,
			cancelled_at: None,
			payment_method: None,
		}
	}

	/// `PAY-<unix millis>-<random>`; only `[A-Za-z0-9-]`, so safe in a path.
	pub fn generate_id(now: OffsetDateTime) -> String {
		let millis = now.unix_timestamp_nanos() / 1_000_000;
		let random = Uuid::new_v4().simple().to_string();
		format!("{ID_PREFIX}-{millis}-{}", &random[..ID_RANDOM_LEN])
	}

	pub fn is_active(&self) -> bool {
		self.status == SessionStatus::Active
	}

	pub fn is_overdue(&self, now: OffsetDateTime) -> bool {
		now > self.expires_at
	}

	/// Whole seconds until the deadline, never negative.
	pub fn time_left(&self, now: OffsetDateTime) -> i64 {
		(self.expires_at - now).whole_seconds().max(0)
	}
}
