//! The session state machine and its counters.
//!
//! `active` moves to exactly one of `paid`, `expired` or `cancelled` and
//! never leaves it. Every transition out of `active` releases `pending` once.

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::domain::error::SessionError;
use crate::domain::session::{Session, SessionStatus};
use crate::domain::stats::{PaymentStats, StatsSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionRead {
	pub session:        Session,
	/// The read itself moved the session to `expired`.
	pub lazily_expired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancellation {
	Cancelled,
	/// Already `expired` or `cancelled`; nothing changed.
	Unchanged(SessionStatus),
}

#[derive(Debug, Default)]
pub struct SessionLedger {
	sessions: HashMap<String, Session>,
	stats:    PaymentStats,
}

impl SessionLedger {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.sessions.contains_key(id)
	}

	pub fn stats(&self) -> PaymentStats {
		self.stats
	}

	/// Registers a freshly created session, drawing a new id if its id is
	/// already taken.
	pub fn open(&mut self, mut session: Session) -> Session {
		while self.contains(&session.id) {
			session.id = Session::generate_id(session.created_at);
		}

		self.stats.record_created();
		self.sessions.insert(session.id.clone(), session.clone());
		session
	}

	pub fn lookup(
		&mut self,
		id: &str,
		now: OffsetDateTime,
	) -> Result<SessionRead, SessionError> {
		let session = self
			.sessions
			.get_mut(id)
			.ok_or_else(|| SessionError::not_found(id))?;

		let lazily_expired = expire_if_overdue(session, &mut self.stats, now);

		Ok(SessionRead {
			session: session.clone(),
			lazily_expired,
		})
	}

	pub fn confirm(
		&mut self,
		id: &str,
		now: OffsetDateTime,
		payment_method: &str,
	) -> Result<Session, SessionError> {
		let session = self
			.sessions
			.get_mut(id)
			.ok_or_else(|| SessionError::not_found(id))?;

		if session.is_overdue(now) {
			expire_if_overdue(session, &mut self.stats, now);
			return Err(SessionError::PaymentExpired);
		}

		if !session.is_active() {
			return Err(SessionError::InvalidState {
				status: session.status,
			});
		}

		session.status = SessionStatus::Paid;
		session.paid_at = Some(now);
		session.payment_method = Some(payment_method.to_string());
		self.stats.record_paid(session.amount);

		Ok(session.clone())
	}

	pub fn cancel(
		&mut self,
		id: &str,
		now: OffsetDateTime,
	) -> Result<Cancellation, SessionError> {
		let session = self
			.sessions
			.get_mut(id)
			.ok_or_else(|| SessionError::not_found(id))?;

		match session.status {
			SessionStatus::Paid => Err(SessionError::InvalidState {
				status: SessionStatus::Paid,
			}),
			SessionStatus::Active => {
				session.status = SessionStatus::Cancelled;
				session.cancelled_at = Some(now);
				self.stats.record_cancelled();
				Ok(Cancellation::Cancelled)
			}
			status => Ok(Cancellation::Unchanged(status)),
		}
	}

	/// Expires every overdue active session and returns how many moved.
	pub fn sweep(&mut self, now: OffsetDateTime) -> usize {
		let mut expired = 0;
		for session in self.sessions.values_mut() {
			if expire_if_overdue(session, &mut self.stats, now) {
				expired += 1;
			}
		}
		expired
	}

	pub fn snapshot(&self) -> StatsSnapshot {
		StatsSnapshot {
			counters:        self.stats,
			active_sessions: self
				.sessions
				.values()
				.filter(|session| session.is_active())
				.count(),
			total_sessions:  self.sessions.len(),
		}
	}
}

fn expire_if_overdue(
	session: &mut Session,
	stats: &mut PaymentStats,
	now: OffsetDateTime,
) -> bool {
	if !session.is_active() || !session.is_overdue(now) {
		return false;
	}

	session.status = SessionStatus::Expired;
	stats.record_expired();
	true
}
