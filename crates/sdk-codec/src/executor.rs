//! Destination executor surface: `executeAndTransfer` calldata and the
//! opaque `CallFailed` revert.

use crate::contracts;
use alloy::sol_types::{SolCall, SolError};
use sdk_types::{Address, Bytes};

/// Calldata for `executeAndTransfer(token, to, target, data)`.
pub fn execute_and_transfer_calldata(
	token: Address,
	to: Address,
	target: Address,
	data: &[u8],
) -> Bytes {
	contracts::ISolverExecutor::executeAndTransferCall {
		token,
		to,
		target,
		data: data.to_vec().into(),
	}
	.abi_encode()
	.into()
}

/// Whether revert data is the executor's argument-less `CallFailed` error.
///
/// The error carries no detail; callers surface it as an opaque execution
/// failure.
pub fn revert_is_call_failed(revert: &[u8]) -> bool {
	revert.len() >= 4 && revert[..4] == contracts::ISolverExecutor::CallFailed::SELECTOR
}
