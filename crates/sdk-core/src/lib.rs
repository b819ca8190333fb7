//! Order flow orchestration.
//!
//! Ties the pieces together into the caller-facing lifecycle: encode an
//! intent, open it on the origin chain, and wait until it reaches a terminal
//! state with the destination fill proof correlated in. One [`OrderFlow`]
//! serves any number of concurrent orders; each flow call owns its own wait
//! state and shares only the chain adapters.

pub mod flow;

pub use flow::{FlowReport, FlowTimeouts, OrderFlow};

use sdk_chains::ChainError;
use sdk_codec::CodecError;
use sdk_origin::TrackError;
use sdk_types::ChainId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
	#[error("network {0} is not configured")]
	UnknownNetwork(ChainId),

	#[error(transparent)]
	Codec(#[from] CodecError),

	#[error(transparent)]
	Chain(#[from] ChainError),

	#[error(transparent)]
	Track(#[from] TrackError),
}
