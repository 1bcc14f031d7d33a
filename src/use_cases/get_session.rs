use std::sync::Arc;

use log::info;

use crate::domain::clock::Clock;
use crate::domain::error::SessionError;
use crate::domain::repository::SessionRepository;
use crate::use_cases::dto::SessionView;

#[derive(Clone)]
pub struct GetSessionUseCase<R: SessionRepository> {
	repository: R,
	clock:      Arc<dyn Clock>,
}

impl<R: SessionRepository> GetSessionUseCase<R> {
	pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
		Self { repository, clock }
	}

	pub fn execute(&self, session_id: &str) -> Result<SessionView, SessionError> {
		let now = self.clock.now();
		let read = self
			.repository
			.transact(|ledger| ledger.lookup(session_id, now))?;

		if read.lazily_expired {
			info!("Session {session_id} expired");
		}

		let time_left = read.session.time_left(now);
		Ok(SessionView {
			session: read.session,
			time_left,
		})
	}
}
