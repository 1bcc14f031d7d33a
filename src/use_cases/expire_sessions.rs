use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::repository::SessionRepository;

#[derive(Clone)]
pub struct ExpireSessionsUseCase<R: SessionRepository> {
	repository: R,
	clock:      Arc<dyn Clock>,
}

impl<R: SessionRepository> ExpireSessionsUseCase<R> {
	pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
		Self { repository, clock }
	}

	/// Returns how many sessions this run moved to `expired`.
	pub fn execute(&self) -> usize {
		let now = self.clock.now();
		self.repository.transact(|ledger| ledger.sweep(now))
	}
}
