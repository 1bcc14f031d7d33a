use std::sync::Arc;

use log::{info, warn};

use crate::domain::clock::Clock;
use crate::domain::error::SessionError;
use crate::domain::money::format_rupiah;
use crate::domain::repository::SessionRepository;
use crate::domain::session::Session;

/// Marks a session paid. Called by the payment gateway webhook, which is
/// trusted as is.
#[derive(Clone)]
pub struct ConfirmPaymentUseCase<R: SessionRepository> {
	repository:     R,
	clock:          Arc<dyn Clock>,
	payment_method: String,
}

impl<R: SessionRepository> ConfirmPaymentUseCase<R> {
	pub fn new(
		repository: R,
		clock: Arc<dyn Clock>,
		payment_method: impl Into<String>,
	) -> Self {
		Self {
			repository,
			clock,
			payment_method: payment_method.into(),
		}
	}

	pub fn execute(&self, session_id: &str) -> Result<Session, SessionError> {
		let now = self.clock.now();
		let result = self.repository.transact(|ledger| {
			ledger.confirm(session_id, now, &self.payment_method)
		});

		match &result {
			Ok(session) => info!(
				"Payment {} succeeded | Amount: {}",
				session.id,
				format_rupiah(session.amount)
			),
			Err(SessionError::PaymentExpired) => {
				warn!("Payment for session {session_id} failed: session expired")
			}
			Err(SessionError::InvalidState { status }) => {
				warn!("Payment for session {session_id} rejected: status {status}")
			}
			Err(_) => {}
		}

		result
	}
}
