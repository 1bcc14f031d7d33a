use std::sync::Arc;

use log::info;

use crate::domain::clock::Clock;
use crate::domain::error::SessionError;
use crate::domain::ledger::Cancellation;
use crate::domain::repository::SessionRepository;

#[derive(Clone)]
pub struct CancelSessionUseCase<R: SessionRepository> {
	repository: R,
	clock:      Arc<dyn Clock>,
}

impl<R: SessionRepository> CancelSessionUseCase<R> {
	pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
		Self { repository, clock }
	}

	/// Cancelling a session that is already expired or cancelled succeeds
	/// and changes nothing. Paid sessions cannot be cancelled.
	pub fn execute(
		&self,
		session_id: &str,
	) -> Result<Cancellation, SessionError> {
		let now = self.clock.now();
		let outcome = self
			.repository
			.transact(|ledger| ledger.cancel(session_id, now))?;

		if outcome == Cancellation::Cancelled {
			info!("Session {session_id} cancelled");
		}

		Ok(outcome)
	}
}
