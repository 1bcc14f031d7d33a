use time::OffsetDateTime;

/// Source of "now" for session deadlines.
pub trait Clock: Send + Sync + 'static {
	fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}
}
