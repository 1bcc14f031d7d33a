use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::ledger::SessionLedger;
use crate::domain::repository::SessionRepository;

/// Process-lifetime session storage. Clones share the same ledger.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
	ledger: Arc<Mutex<SessionLedger>>,
}

impl InMemorySessionStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SessionRepository for InMemorySessionStore {
	fn transact<T, F>(&self, op: F) -> T
	where
		F: FnOnce(&mut SessionLedger) -> T,
	{
		// Ledger methods only mutate after their checks pass, so a poisoned
		// lock still guards a consistent ledger.
		let mut ledger =
			self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
		op(&mut ledger)
	}
}
