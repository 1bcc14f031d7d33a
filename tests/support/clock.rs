use std::sync::{Arc, Mutex, PoisonError};

use qris_payment::domain::clock::Clock;
use time::{Duration, OffsetDateTime};

/// A clock that only moves when told to. Shared between clones.
#[derive(Debug, Clone)]
pub struct ManualClock {
	now: Arc<Mutex<OffsetDateTime>>,
}

impl ManualClock {
	pub fn new(start: OffsetDateTime) -> Self {
		Self {
			now: Arc::new(Mutex::new(start)),
		}
	}

	pub fn advance(&self, by: Duration) {
		let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
		*now += by;
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new(OffsetDateTime::now_utc())
	}
}

impl Clock for ManualClock {
	fn now(&self) -> OffsetDateTime {
		*self.now.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
