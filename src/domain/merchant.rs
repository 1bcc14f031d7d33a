use crate::domain::qris::{self, CodecError};

pub const DEFAULT_MERCHANT_NAME: &str = "Maulana Store";
pub const DEFAULT_MERCHANT_LOCATION: &str = "Kota Tangerang";
pub const DEFAULT_PAYMENT_METHOD: &str = "QRIS-DANA";
pub const DEFAULT_QRIS_PAYLOAD: &str = "00020101021126570011ID.DANA.WWW011893600915353041430702095304143070303UMI51440014ID.CO.QRIS.WWW0215ID10232989429970303UMI5204581353033605802ID5913Maulana store6015Kota Tangerang 610515419630467D6";

/// The merchant every session is issued for, with its static QRIS payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantProfile {
	pub name:           String,
	pub location:       String,
	pub qris_payload:   String,
	pub payment_method: String,
}

impl MerchantProfile {
	/// Fails if the payload cannot take an amount field.
	pub fn new(
		name: impl Into<String>,
		location: impl Into<String>,
		qris_payload: impl Into<String>,
		payment_method: impl Into<String>,
	) -> Result<Self, CodecError> {
		let qris_payload = qris_payload.into();
		qris::validate_base(&qris_payload)?;

		Ok(Self {
			name: name.into(),
			location: location.into(),
			qris_payload,
			payment_method: payment_method.into(),
		})
	}
}
