//! Fill origin-data codec and the fill-content hash.

use crate::{contracts, error::CodecError, order};
use alloy::{primitives::keccak256, sol_types::SolValue};
use sdk_types::{Bytes, Bytes32, ChainId, FillOriginData, OrderId};

/// Encode a fill origin-data payload.
///
/// Applies the same width and list-limit validation as order encoding; the
/// payload feeds the fill hash, so determinism matters here too.
pub fn encode_fill_origin_data(data: &FillOriginData) -> Result<Bytes, CodecError> {
	if data.calls.len() > order::MAX_CALLS {
		return Err(CodecError::TooManyItems {
			list: "calls",
			max: order::MAX_CALLS,
		});
	}
	if data.expenses.len() > order::MAX_EXPENSES {
		return Err(CodecError::TooManyItems {
			list: "expenses",
			max: order::MAX_EXPENSES,
		});
	}

	let encoded = contracts::FillOriginData {
		srcChainId: data.src_chain_id.0,
		destChainId: data.dest_chain_id.0,
		fillDeadline: data.fill_deadline,
		calls: order::calls_to_sol(&data.calls),
		expenses: order::expenses_to_sol(&data.expenses)?,
	};
	Ok(encoded.abi_encode().into())
}

/// Decode a fill origin-data payload.
pub fn decode_fill_origin_data(data: &[u8]) -> Result<FillOriginData, CodecError> {
	let decoded = contracts::FillOriginData::abi_decode(data)?;
	Ok(FillOriginData {
		src_chain_id: ChainId(decoded.srcChainId),
		dest_chain_id: ChainId(decoded.destChainId),
		fill_deadline: decoded.fillDeadline,
		calls: order::calls_from_sol(decoded.calls),
		expenses: order::expenses_from_sol(decoded.expenses),
	})
}

/// Deterministic hash binding a fill execution to its exact instruction:
/// `keccak256(abi.encode(orderId, originData))`.
///
/// The destination outbox emits this in `Filled` and keys `didFill` on the
/// same content, so it proves which instruction was executed, not merely
/// that some fill for the order happened.
pub fn fill_hash(order_id: OrderId, origin_data: &[u8]) -> Bytes32 {
	keccak256((order_id, origin_data.to_vec()).abi_encode_params())
}
