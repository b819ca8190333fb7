//! Fixed-width numeric conversions between domain and wire values.

use crate::error::CodecError;
use alloy::primitives::aliases::U96;
use sdk_types::U256;

/// Narrow a domain amount into a wire uint96, failing on overflow.
pub fn to_u96(value: U256, field: &'static str) -> Result<U96, CodecError> {
	if value.bit_len() > 96 {
		return Err(CodecError::FieldOverflow { field, bits: 96 });
	}
	let limbs = value.as_limbs();
	Ok(U96::from_limbs([limbs[0], limbs[1]]))
}

/// Widen a wire uint96 back into the domain representation.
pub fn from_u96(value: U96) -> U256 {
	let limbs = value.as_limbs();
	U256::from_limbs([limbs[0], limbs[1], 0, 0])
}
