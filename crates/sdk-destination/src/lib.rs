//! Destination-chain fill correlation.
//!
//! Watches the destination settler for evidence that a resolved order's fill
//! instruction was executed. Two signals exist: the `Filled` event (carries
//! the filler address, may be missed) and the `didFill` view function
//! (authoritative, but anonymous). The view function always wins; events
//! only enrich a confirmed fill with its filler.

pub mod correlator;

pub use correlator::{DestinationCorrelator, FillLocation, FillObservation, FillWatch};

use sdk_chains::ChainError;
use sdk_codec::CodecError;
use sdk_types::{ConflictingObservation, NonAddressBytes};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorrelateError {
	#[error("resolved order carries no fill instructions")]
	NoFillInstructions,

	/// A resolved order may repeat one instruction, but two different ones
	/// would make the fill target ambiguous.
	#[error("resolved order carries inconsistent fill instructions")]
	InconsistentInstructions,

	#[error("destination settler is not an EVM address: {0}")]
	NonEvmSettler(#[from] NonAddressBytes),

	#[error(transparent)]
	Chain(#[from] ChainError),

	#[error(transparent)]
	Codec(#[from] CodecError),

	#[error(transparent)]
	Conflict(#[from] ConflictingObservation),
}
