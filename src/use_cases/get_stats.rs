use crate::domain::repository::SessionRepository;
use crate::domain::stats::StatsSnapshot;

#[derive(Clone)]
pub struct GetStatsUseCase<R: SessionRepository> {
	repository: R,
}

impl<R: SessionRepository> GetStatsUseCase<R> {
	pub fn new(repository: R) -> Self {
		Self { repository }
	}

	pub fn execute(&self) -> StatsSnapshot {
		self.repository.transact(|ledger| ledger.snapshot())
	}
}
