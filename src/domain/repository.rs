use crate::domain::ledger::SessionLedger;

/// Owner of the session ledger.
///
/// Every lifecycle operation is one call to `transact`, so a read, the
/// decision and the write happen while no other caller can see the ledger.
pub trait SessionRepository: Send + Sync + 'static {
	fn transact<T, F>(&self, op: F) -> T
	where
		F: FnOnce(&mut SessionLedger) -> T;
}
