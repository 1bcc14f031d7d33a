//! Amount embedding for static merchant QRIS payloads.
//!
//! A static QRIS string carries no amount. Injecting tag `54` (transaction
//! amount) right before the country-code field `5802ID` turns it into a
//! payload that asks the payer for a fixed amount. The CRC trailer is left
//! untouched.

use derive_more::derive::{Display, Error};

/// Tag of the transaction amount field.
pub const AMOUNT_TAG: &str = "54";
/// Country code field the amount field is inserted in front of.
pub const COUNTRY_CODE_ANCHOR: &str = "5802ID";

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
	#[display("QRIS payload has no country code field (5802ID).")]
	AnchorMissing,
	#[display(
		"QRIS payload has {occurrences} country code fields (5802ID), expected \
		 exactly one."
	)]
	AnchorDuplicated { occurrences: usize },
}

/// Checks that `base` carries the country code anchor exactly once.
pub fn validate_base(base: &str) -> Result<usize, CodecError> {
	let mut positions = base.match_indices(COUNTRY_CODE_ANCHOR).map(|(i, _)| i);

	let first = positions.next().ok_or(CodecError::AnchorMissing)?;
	let extra = positions.count();
	if extra > 0 {
		return Err(CodecError::AnchorDuplicated {
			occurrences: extra + 1,
		});
	}

	Ok(first)
}

/// Returns `base` with the amount field `54<len><amount>` inserted before the
/// country code. Non-positive amounts leave the payload as is.
pub fn embed_amount(base: &str, amount: i64) -> Result<String, CodecError> {
	if amount <= 0 {
		return Ok(base.to_string());
	}

	let anchor_at = validate_base(base)?;
	let field = amount_field(amount);

	let mut payload = String::with_capacity(base.len() + field.len());
	payload.push_str(&base[..anchor_at]);
	payload.push_str(&field);
	payload.push_str(&base[anchor_at..]);

	Ok(payload)
}

fn amount_field(amount: i64) -> String {
	let value = amount.to_string();
	format!("{AMOUNT_TAG}{:02}{value}", value.len())
}
