//! The in-memory order model.
//!
//! All types here are immutable value objects: an order intent is fixed once
//! encoded, and a resolved order is the chain-confirmed form reported by the
//! origin contract. Nothing in this module is mutated in place; re-observed
//! state replaces the previous view wholesale (see [`crate::status`]).

use crate::common::*;
use serde::{Deserialize, Serialize};

/// Funds the user locks on the origin chain when the order opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
	pub token: Address,
	pub amount: U256,
}

/// One atomic sub-call the destination executor performs, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecCall {
	pub target: Address,
	pub selector: Selector,
	pub value: U256,
	pub params: Bytes,
}

/// A pre-authorized spend the destination executor may draw while executing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
	pub spender: Address,
	pub token: Address,
	/// Encoded on the wire as uint96; encoding fails if the value overflows.
	pub amount: U256,
}

/// User-specified order intent. Immutable once encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
	pub owner: Address,
	pub dest_chain_id: ChainId,
	pub deposit: Deposit,
	pub calls: Vec<ExecCall>,
	pub expenses: Vec<Expense>,
	/// Unix deadline by which the fill must land on the destination chain.
	pub fill_deadline: u32,
}

/// The canonical on-chain order tuple submitted to the origin inbox.
///
/// `order_data_type` uniquely determines how `order_data` decodes; decoding
/// under any other tag fails closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnchainOrder {
	pub fill_deadline: u32,
	pub order_data_type: Bytes32,
	pub order_data: Bytes,
}

/// ERC-7683 output: token/recipient are chain-agnostic 32-byte identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
	pub token: Bytes32,
	pub amount: U256,
	pub recipient: Bytes32,
	pub chain_id: U256,
}

/// Instruction telling a destination settler how to execute the fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillInstruction {
	pub destination_chain_id: ChainId,
	pub destination_settler: Bytes32,
	/// Opaque payload the destination contract needs to execute the fill.
	pub origin_data: Bytes,
}

/// Canonical cross-chain view of an order once the origin contract accepts it.
///
/// `order_id` is stable for the lifetime of the order and is the sole
/// correlation key between origin and destination observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOrder {
	pub user: Address,
	pub origin_chain_id: U256,
	pub open_deadline: u32,
	pub fill_deadline: u32,
	pub order_id: OrderId,
	pub max_spent: Vec<Output>,
	pub min_received: Vec<Output>,
	pub fill_instructions: Vec<FillInstruction>,
}

/// Decoded form of a fill instruction's `origin_data` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillOriginData {
	pub src_chain_id: ChainId,
	pub dest_chain_id: ChainId,
	pub fill_deadline: u32,
	pub calls: Vec<ExecCall>,
	pub expenses: Vec<Expense>,
}

/// Content-addressed proof that a specific fill instruction was executed.
///
/// `fill_hash` commits to `(orderId, originData)`, not merely to the order
/// id, so it proves which instruction was executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRecord {
	pub order_id: OrderId,
	pub fill_hash: Bytes32,
	/// Zero when the fill was confirmed through the view function alone and
	/// no `Filled` event has been observed yet.
	pub filled_by: Address,
}
