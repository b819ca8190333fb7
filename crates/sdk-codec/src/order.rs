//! Order payload encoding: the canonical on-chain tuple and its tagged
//! order-data union.
//!
//! The `orderDataType` tag is the keccak-256 hash of the canonical type
//! string, EIP-712 style. The union is closed: decoding under any tag the
//! SDK does not know fails with [`CodecError::UnknownOrderDataType`] rather
//! than guessing at the byte layout.

use crate::{contracts, error::CodecError, num};
use alloy::{primitives::keccak256, sol_types::SolValue};
use sdk_types::{Bytes32, ChainId, Deposit, ExecCall, Expense, OnchainOrder, OrderIntent};

/// Inbox-imposed cap on the call list.
pub const MAX_CALLS: usize = 32;
/// Inbox-imposed cap on the expense list.
pub const MAX_EXPENSES: usize = 32;

/// Canonical composite type string behind the standard order-data tag.
pub const ORDER_DATA_TYPE: &str = "OrderData(address owner,uint64 destChainId,Deposit deposit,Call[] calls,Expense[] expenses)Call(address target,bytes4 selector,uint256 value,bytes params)Deposit(address token,uint96 amount)Expense(address spender,address token,uint96 amount)";

/// Type tag for the standard order-data layout.
pub fn order_data_typehash() -> Bytes32 {
	keccak256(ORDER_DATA_TYPE.as_bytes())
}

/// Decoded `orderData` for the standard tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardOrderData {
	pub owner: sdk_types::Address,
	pub dest_chain_id: ChainId,
	pub deposit: Deposit,
	pub calls: Vec<ExecCall>,
	pub expenses: Vec<Expense>,
}

/// Closed tagged union over the order-data layouts the SDK understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderData {
	Standard(StandardOrderData),
}

/// Encode an order intent into the canonical on-chain tuple.
///
/// Validation happens here, before any submission: fixed-width ranges,
/// list limits, and a nonzero destination chain. Encoding is deterministic;
/// the same intent always yields identical bytes.
pub fn encode_order(intent: &OrderIntent) -> Result<OnchainOrder, CodecError> {
	if intent.calls.is_empty() {
		return Err(CodecError::NoCalls);
	}
	if intent.calls.len() > MAX_CALLS {
		return Err(CodecError::TooManyItems {
			list: "calls",
			max: MAX_CALLS,
		});
	}
	if intent.expenses.len() > MAX_EXPENSES {
		return Err(CodecError::TooManyItems {
			list: "expenses",
			max: MAX_EXPENSES,
		});
	}
	if intent.dest_chain_id.0 == 0 {
		return Err(CodecError::ZeroChainId);
	}

	let order_data = contracts::OrderData {
		owner: intent.owner,
		destChainId: intent.dest_chain_id.0,
		deposit: contracts::Deposit {
			token: intent.deposit.token,
			amount: num::to_u96(intent.deposit.amount, "deposit.amount")?,
		},
		calls: calls_to_sol(&intent.calls),
		expenses: expenses_to_sol(&intent.expenses)?,
	};

	Ok(OnchainOrder {
		fill_deadline: intent.fill_deadline,
		order_data_type: order_data_typehash(),
		order_data: order_data.abi_encode().into(),
	})
}

/// Decode an `orderData` payload under the given type tag.
///
/// Fails closed on any tag other than the standard one: the tag uniquely
/// determines the layout, and misinterpreting bytes silently is worse than
/// refusing them.
pub fn decode_order_data(data: &[u8], type_tag: Bytes32) -> Result<OrderData, CodecError> {
	if type_tag != order_data_typehash() {
		return Err(CodecError::UnknownOrderDataType(type_tag));
	}

	let decoded = contracts::OrderData::abi_decode(data)?;
	Ok(OrderData::Standard(StandardOrderData {
		owner: decoded.owner,
		dest_chain_id: ChainId(decoded.destChainId),
		deposit: Deposit {
			token: decoded.deposit.token,
			amount: num::from_u96(decoded.deposit.amount),
		},
		calls: calls_from_sol(decoded.calls),
		expenses: expenses_from_sol(decoded.expenses),
	}))
}

pub(crate) fn calls_to_sol(calls: &[ExecCall]) -> Vec<contracts::Call> {
	calls
		.iter()
		.map(|call| contracts::Call {
			target: call.target,
			selector: call.selector,
			value: call.value,
			params: call.params.clone(),
		})
		.collect()
}

pub(crate) fn calls_from_sol(calls: Vec<contracts::Call>) -> Vec<ExecCall> {
	calls
		.into_iter()
		.map(|call| ExecCall {
			target: call.target,
			selector: call.selector,
			value: call.value,
			params: call.params,
		})
		.collect()
}

pub(crate) fn expenses_to_sol(expenses: &[Expense]) -> Result<Vec<contracts::Expense>, CodecError> {
	expenses
		.iter()
		.map(|expense| {
			Ok(contracts::Expense {
				spender: expense.spender,
				token: expense.token,
				amount: num::to_u96(expense.amount, "expense.amount")?,
			})
		})
		.collect()
}

pub(crate) fn expenses_from_sol(expenses: Vec<contracts::Expense>) -> Vec<Expense> {
	expenses
		.into_iter()
		.map(|expense| Expense {
			spender: expense.spender,
			token: expense.token,
			amount: num::from_u96(expense.amount),
		})
		.collect()
}
