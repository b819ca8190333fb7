//! Origin-chain order tracking.
//!
//! Submits orders to the settler inbox and drives the lifecycle waits: open
//! confirmation, then the long wait for a terminal state. The inbox view
//! function is the source of truth for origin state; `Open` logs and
//! destination fill proofs feed the same monotonic status merge, so
//! duplicated or out-of-order observations never regress an order.

pub mod tracker;

pub use tracker::OriginTracker;

use sdk_chains::ChainError;
use sdk_codec::CodecError;
use sdk_destination::CorrelateError;
use sdk_types::{ConflictingObservation, TxHash};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
	#[error("wait timed out")]
	Timeout,

	#[error("wait cancelled by caller")]
	Cancelled,

	#[error("open transaction {0} reverted")]
	OpenReverted(TxHash),

	/// The open transaction succeeded but its receipt carries no `Open` log
	/// from the inbox, so no order id can be recovered.
	#[error("open transaction {0} emitted no Open event")]
	MissingOpenEvent(TxHash),

	#[error(transparent)]
	Chain(#[from] ChainError),

	#[error(transparent)]
	Codec(#[from] CodecError),

	#[error(transparent)]
	Correlate(#[from] CorrelateError),

	#[error(transparent)]
	Conflict(#[from] ConflictingObservation),
}
