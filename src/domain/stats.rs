use serde::{Deserialize, Serialize};

/// Running counters kept next to the sessions.
///
/// There is no cancelled counter: a cancellation only releases `pending`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
	pub total:        u64,
	pub success:      u64,
	pub expired:      u64,
	pub pending:      u64,
	pub total_amount: u64,
}

impl PaymentStats {
	pub fn record_created(&mut self) {
		self.total += 1;
		self.pending += 1;
	}

	pub fn record_paid(&mut self, amount: u64) {
		self.success += 1;
		self.pending = self.pending.saturating_sub(1);
		self.total_amount += amount;
	}

	pub fn record_expired(&mut self) {
		self.expired += 1;
		self.pending = self.pending.saturating_sub(1);
	}

	pub fn record_cancelled(&mut self) {
		self.pending = self.pending.saturating_sub(1);
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
	#[serde(flatten)]
	pub counters:        PaymentStats,
	pub active_sessions: usize,
	pub total_sessions:  usize,
}
