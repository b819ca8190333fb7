//! Order status state machine and observation merging.
//!
//! Transitions are driven only by externally observed facts (an event or a
//! view-function read); the single exception is the deadline-based `Expired`
//! transition, which cross-references chain time against the deadline in the
//! resolved order. Observations may arrive out of order or more than once,
//! so state advances through [`merge_status`]: a rank-monotonic rule where a
//! stale or duplicate observation is a no-op and two distinct terminal
//! observations are a conflict that is surfaced, never auto-resolved.

use crate::common::{Address, OrderId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raw status byte reported by the origin inbox view function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum WireStatus {
	Invalid = 0,
	Pending = 1,
	Rejected = 2,
	Closed = 3,
	Filled = 4,
	Claimed = 5,
}

impl TryFrom<u8> for WireStatus {
	type Error = UnknownStatusByte;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(WireStatus::Invalid),
			1 => Ok(WireStatus::Pending),
			2 => Ok(WireStatus::Rejected),
			3 => Ok(WireStatus::Closed),
			4 => Ok(WireStatus::Filled),
			5 => Ok(WireStatus::Claimed),
			other => Err(UnknownStatusByte(other)),
		}
	}
}

/// Error for a status byte outside the closed wire enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown order status byte: {0}")]
pub struct UnknownStatusByte(pub u8);

/// SDK-level order status.
///
/// `Filled`, `Rejected` and `Expired` are terminal; once reached no further
/// transition is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
	/// Not yet observed on-chain
	Unknown,
	/// Origin contract accepted the order; a resolved order is available
	Opened,
	/// Fill verified on the destination chain
	Filled,
	/// Explicit protocol-level refusal; reject reason is set
	Rejected,
	/// Deadline elapsed with no fill
	Expired,
}

impl OrderStatus {
	pub fn is_terminal(&self) -> bool {
		matches!(
			self,
			OrderStatus::Filled | OrderStatus::Rejected | OrderStatus::Expired
		)
	}

	/// Monotonic rank used by [`merge_status`].
	fn rank(&self) -> u8 {
		match self {
			OrderStatus::Unknown => 0,
			OrderStatus::Opened => 1,
			OrderStatus::Filled | OrderStatus::Rejected | OrderStatus::Expired => 2,
		}
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OrderStatus::Unknown => write!(f, "unknown"),
			OrderStatus::Opened => write!(f, "opened"),
			OrderStatus::Filled => write!(f, "filled"),
			OrderStatus::Rejected => write!(f, "rejected"),
			OrderStatus::Expired => write!(f, "expired"),
		}
	}
}

impl From<WireStatus> for OrderStatus {
	fn from(wire: WireStatus) -> Self {
		match wire {
			WireStatus::Invalid => OrderStatus::Unknown,
			WireStatus::Pending => OrderStatus::Opened,
			WireStatus::Rejected => OrderStatus::Rejected,
			// The inbox closes an order when its deadline elapsed unfilled
			// and the deposit was returned.
			WireStatus::Closed => OrderStatus::Expired,
			WireStatus::Filled | WireStatus::Claimed => OrderStatus::Filled,
		}
	}
}

/// Origin-chain order state, replaced wholesale on every re-observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStateView {
	pub status: OrderStatus,
	reject_reason: u8,
	pub timestamp: u32,
	pub updated_by: Address,
}

impl OrderStateView {
	pub fn new(status: OrderStatus, reject_reason: u8, timestamp: u32, updated_by: Address) -> Self {
		Self {
			status,
			reject_reason,
			timestamp,
			updated_by,
		}
	}

	pub fn unknown() -> Self {
		Self::new(OrderStatus::Unknown, 0, 0, Address::ZERO)
	}

	/// The reject reason byte, meaningful only for rejected orders.
	pub fn reject_reason(&self) -> Option<u8> {
		match self.status {
			OrderStatus::Rejected => Some(self.reject_reason),
			_ => None,
		}
	}
}

/// Outcome of merging a new observation into the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMerge {
	/// The observation advances the state machine
	Advanced,
	/// Duplicate or out-of-order delivery; keep the current state
	Stale,
	/// Two distinct terminal observations; must be surfaced to the caller
	Conflict,
}

/// Rank-monotonic merge of an observed status into the current one.
///
/// A duplicate `Opened` observation is a stale no-op (the inbox open is
/// idempotent), and a late `Opened` re-delivery can never regress a
/// terminal state. Distinct terminal statuses conflict.
pub fn merge_status(current: OrderStatus, observed: OrderStatus) -> StatusMerge {
	if current == observed {
		return StatusMerge::Stale;
	}
	if current.is_terminal() && observed.is_terminal() {
		return StatusMerge::Conflict;
	}
	if observed.rank() > current.rank() {
		StatusMerge::Advanced
	} else {
		StatusMerge::Stale
	}
}

/// Best-effort description of an inbox reject reason byte.
///
/// The byte is protocol-defined and forward-extensible; unknown values are
/// reported verbatim by callers.
pub fn reject_reason_description(reason: u8) -> &'static str {
	match reason {
		0 => "none",
		1 => "destination chain not supported",
		2 => "unsupported deposit token",
		3 => "deposit below solver quote",
		4 => "insufficient solver inventory",
		5 => "expense limit exceeded",
		6 => "fill deadline too tight",
		_ => "unrecognized reason",
	}
}

/// Invariant violation between two independent observations of one order.
///
/// Indicates a protocol or indexing inconsistency (for example a verified
/// destination fill while the origin reports the order rejected). Always
/// surfaced to the caller for re-validation, never resolved silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conflicting observations for order {order_id}: {first} vs {second}")]
pub struct ConflictingObservation {
	pub order_id: OrderId,
	pub first: String,
	pub second: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::common::B256;

	#[test]
	fn test_wire_status_round_trip() {
		for byte in 0u8..=5 {
			let wire = WireStatus::try_from(byte).unwrap();
			assert_eq!(wire as u8, byte);
		}
		assert_eq!(WireStatus::try_from(6), Err(UnknownStatusByte(6)));
	}

	#[test]
	fn test_wire_mapping() {
		assert_eq!(OrderStatus::from(WireStatus::Invalid), OrderStatus::Unknown);
		assert_eq!(OrderStatus::from(WireStatus::Pending), OrderStatus::Opened);
		assert_eq!(OrderStatus::from(WireStatus::Rejected), OrderStatus::Rejected);
		assert_eq!(OrderStatus::from(WireStatus::Closed), OrderStatus::Expired);
		assert_eq!(OrderStatus::from(WireStatus::Filled), OrderStatus::Filled);
		assert_eq!(OrderStatus::from(WireStatus::Claimed), OrderStatus::Filled);
	}

	#[test]
	fn test_merge_advances_forward() {
		assert_eq!(
			merge_status(OrderStatus::Unknown, OrderStatus::Opened),
			StatusMerge::Advanced
		);
		assert_eq!(
			merge_status(OrderStatus::Opened, OrderStatus::Filled),
			StatusMerge::Advanced
		);
		assert_eq!(
			merge_status(OrderStatus::Unknown, OrderStatus::Rejected),
			StatusMerge::Advanced
		);
	}

	#[test]
	fn test_merge_is_monotonic() {
		// A stale Opened re-delivery never regresses a terminal state.
		for terminal in [
			OrderStatus::Filled,
			OrderStatus::Rejected,
			OrderStatus::Expired,
		] {
			assert_eq!(
				merge_status(terminal, OrderStatus::Opened),
				StatusMerge::Stale
			);
			assert_eq!(
				merge_status(terminal, OrderStatus::Unknown),
				StatusMerge::Stale
			);
			assert_eq!(merge_status(terminal, terminal), StatusMerge::Stale);
		}
	}

	#[test]
	fn test_duplicate_open_is_noop() {
		assert_eq!(
			merge_status(OrderStatus::Opened, OrderStatus::Opened),
			StatusMerge::Stale
		);
	}

	#[test]
	fn test_distinct_terminals_conflict() {
		assert_eq!(
			merge_status(OrderStatus::Filled, OrderStatus::Rejected),
			StatusMerge::Conflict
		);
		assert_eq!(
			merge_status(OrderStatus::Rejected, OrderStatus::Filled),
			StatusMerge::Conflict
		);
		assert_eq!(
			merge_status(OrderStatus::Expired, OrderStatus::Filled),
			StatusMerge::Conflict
		);
	}

	#[test]
	fn test_reject_reason_scoped_to_rejected() {
		let rejected = OrderStateView::new(OrderStatus::Rejected, 3, 100, Address::ZERO);
		assert_eq!(rejected.reject_reason(), Some(3));

		// The byte must be ignored for any other status.
		let opened = OrderStateView::new(OrderStatus::Opened, 3, 100, Address::ZERO);
		assert_eq!(opened.reject_reason(), None);
	}

	#[test]
	fn test_conflict_error_names_order() {
		let err = ConflictingObservation {
			order_id: B256::repeat_byte(0xab),
			first: "origin rejected".into(),
			second: "destination filled".into(),
		};
		let msg = err.to_string();
		assert!(msg.contains("origin rejected"));
		assert!(msg.contains("destination filled"));
	}
}
