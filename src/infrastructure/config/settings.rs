use std::time::Duration;

use serde::Deserialize;

use crate::domain::merchant::{
	DEFAULT_MERCHANT_LOCATION, DEFAULT_MERCHANT_NAME, DEFAULT_PAYMENT_METHOD,
	DEFAULT_QRIS_PAYLOAD, MerchantProfile,
};
use crate::domain::qris::CodecError;
use crate::domain::session::{DEFAULT_MAX_AMOUNT, SessionPolicy};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host:           String,
	pub server_port:           u16,
	pub server_keepalive:      u64,
	pub session_ttl_secs:      u64,
	pub sweep_interval_secs:   u64,
	pub max_amount:            u64,
	pub merchant_name:         String,
	pub merchant_location:     String,
	pub merchant_qris_payload: String,
	pub payment_method:        String,
}

impl Config {
	/// Defaults overridden by `APP_*` environment variables.
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 3000)?
			.set_default("server_keepalive", 75)?
			.set_default("session_ttl_secs", 60)?
			.set_default("sweep_interval_secs", 30)?
			.set_default("max_amount", DEFAULT_MAX_AMOUNT)?
			.set_default("merchant_name", DEFAULT_MERCHANT_NAME)?
			.set_default("merchant_location", DEFAULT_MERCHANT_LOCATION)?
			.set_default("merchant_qris_payload", DEFAULT_QRIS_PAYLOAD)?
			.set_default("payment_method", DEFAULT_PAYMENT_METHOD)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn session_policy(&self) -> SessionPolicy {
		SessionPolicy {
			ttl:        time::Duration::seconds(self.session_ttl_secs as i64),
			max_amount: self.max_amount,
		}
	}

	pub fn sweep_interval(&self) -> Duration {
		Duration::from_secs(self.sweep_interval_secs)
	}

	pub fn merchant_profile(&self) -> Result<MerchantProfile, CodecError> {
		MerchantProfile::new(
			self.merchant_name.clone(),
			self.merchant_location.clone(),
			self.merchant_qris_payload.clone(),
			self.payment_method.clone(),
		)
	}
}
