//! Common types used throughout the SDK.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Re-export commonly used ethereum primitives
pub use alloy::primitives::{Address, Bytes, FixedBytes, B256, U256};

/// 32-byte chain-agnostic identifier (token, recipient, settler)
pub type Bytes32 = B256;

/// Transaction hash
pub type TxHash = B256;

/// Unique order identifier, content-derived by the origin contract
pub type OrderId = B256;

/// 4-byte function selector
pub type Selector = FixedBytes<4>;

/// Block number
pub type BlockNumber = u64;

/// Timestamp (Unix seconds)
pub type Timestamp = u64;

/// Chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
	pub const ETHEREUM: Self = Self(1);
	pub const OPTIMISM: Self = Self(10);
	pub const ARBITRUM: Self = Self(42161);
	pub const BASE: Self = Self(8453);
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChainId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(ChainId(s.parse()?))
	}
}

/// Error returned when a bytes32 identifier does not embed an EVM address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bytes32 does not encode an EVM address (nonzero 12-byte prefix)")]
pub struct NonAddressBytes;

/// Convert an EVM address to the chain-agnostic bytes32 form (left-padded).
pub fn address_to_bytes32(addr: Address) -> Bytes32 {
	let mut bytes = [0u8; 32];
	bytes[12..].copy_from_slice(addr.as_slice());
	Bytes32::from(bytes)
}

/// Extract an EVM address from a bytes32 identifier.
///
/// Fails if the 12-byte prefix is nonzero, which would mean the identifier
/// belongs to a non-EVM address format.
pub fn bytes32_to_address(bytes: &Bytes32) -> Result<Address, NonAddressBytes> {
	if bytes[..12].iter().any(|&b| b != 0) {
		return Err(NonAddressBytes);
	}
	Ok(Address::from_slice(&bytes[12..]))
}
