use std::sync::Arc;

use log::info;

use crate::domain::clock::Clock;
use crate::domain::error::SessionError;
use crate::domain::merchant::MerchantProfile;
use crate::domain::money::format_rupiah;
use crate::domain::qris;
use crate::domain::repository::SessionRepository;
use crate::domain::session::{Session, SessionPolicy};
use crate::use_cases::dto::CreateSessionCommand;

#[derive(Clone)]
pub struct CreateSessionUseCase<R: SessionRepository> {
	repository: R,
	clock:      Arc<dyn Clock>,
	merchant:   Arc<MerchantProfile>,
	policy:     SessionPolicy,
}

impl<R: SessionRepository> CreateSessionUseCase<R> {
	pub fn new(
		repository: R,
		clock: Arc<dyn Clock>,
		merchant: Arc<MerchantProfile>,
		policy: SessionPolicy,
	) -> Self {
		Self {
			repository,
			clock,
			merchant,
			policy,
		}
	}

	pub fn execute(
		&self,
		command: CreateSessionCommand,
	) -> Result<Session, SessionError> {
		let amount = self.validate_amount(command.amount)?;
		let qr_payload =
			qris::embed_amount(&self.merchant.qris_payload, command.amount)?;
		let now = self.clock.now();

		let session = self.repository.transact(|ledger| {
			ledger.open(Session::open(
				Session::generate_id(now),
				amount,
				qr_payload,
				&self.merchant,
				now,
				self.policy.ttl,
			))
		});

		info!(
			"Session {} created | Amount: {}",
			session.id,
			format_rupiah(session.amount)
		);
		Ok(session)
	}

	fn validate_amount(&self, amount: i64) -> Result<u64, SessionError> {
		let amount = u64::try_from(amount)
			.ok()
			.filter(|amount| *amount > 0)
			.ok_or(SessionError::AmountNotPositive)?;

		if amount > self.policy.max_amount {
			return Err(SessionError::AmountAboveLimit {
				limit: format_rupiah(self.policy.max_amount),
			});
		}

		Ok(amount)
	}
}
