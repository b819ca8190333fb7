//! Codec error type.

use sdk_types::{Bytes32, UnknownStatusByte};
use thiserror::Error;

/// Local encoding/decoding failure. Detected before anything reaches a
/// chain and never retried.
#[derive(Debug, Error)]
pub enum CodecError {
	#[error("{field} exceeds the {bits}-bit wire range")]
	FieldOverflow { field: &'static str, bits: u32 },

	#[error("{list} exceeds the protocol limit of {max} entries")]
	TooManyItems { list: &'static str, max: usize },

	#[error("order contains no calls")]
	NoCalls,

	#[error("order names no destination chain")]
	ZeroChainId,

	#[error("unknown order data type tag: {0}")]
	UnknownOrderDataType(Bytes32),

	#[error(transparent)]
	UnknownStatus(#[from] UnknownStatusByte),

	#[error("abi decoding failed: {0}")]
	Abi(#[from] alloy::sol_types::Error),

	#[error("log does not match the expected {0} event")]
	EventMismatch(&'static str),
}
