use std::time::Duration;

use log::{debug, info};
use tokio::time::sleep;

use crate::domain::repository::SessionRepository;
use crate::use_cases::expire_sessions::ExpireSessionsUseCase;

/// Expires overdue sessions every `interval`, for as long as the process runs.
pub async fn session_expiry_worker<R>(
	expire_sessions_use_case: ExpireSessionsUseCase<R>,
	interval: Duration,
) where
	R: SessionRepository + Clone,
{
	loop {
		sleep(interval).await;

		let expired = expire_sessions_use_case.execute();
		if expired > 0 {
			info!("Cleanup: {expired} session(s) expired");
		} else {
			debug!("Cleanup: no overdue sessions");
		}
	}
}
