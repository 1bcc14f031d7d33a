use serde::{Deserialize, Serialize};

use crate::domain::session::Session;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateSessionCommand {
	pub amount: i64,
}

/// A session as seen by a reader, with the seconds left to pay.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
	#[serde(flatten)]
	pub session:   Session,
	pub time_left: i64,
}
