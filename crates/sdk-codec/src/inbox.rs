//! Origin inbox surface: `open`/`getOrder` calldata, their returns, and
//! the `Open`/`Rejected` events.

use crate::{contracts, error::CodecError};
use alloy::sol_types::{SolCall, SolEvent, SolValue};
use sdk_types::{
	Address, Bytes, Bytes32, ChainId, FillInstruction, OnchainOrder, OrderId, OrderStateView,
	Output, ResolvedOrder, WireStatus,
};

/// Open event decoded into the domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEvent {
	pub order_id: OrderId,
	pub resolved: ResolvedOrder,
}

/// Rejected event decoded into the domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
	pub order_id: OrderId,
	pub by: Address,
	pub reason: u8,
}

/// Calldata for `open(order)`.
pub fn open_calldata(order: &OnchainOrder) -> Bytes {
	contracts::ISettlerInbox::openCall {
		order: contracts::OnchainCrossChainOrder {
			fillDeadline: order.fill_deadline,
			orderDataType: order.order_data_type,
			orderData: order.order_data.clone(),
		},
	}
	.abi_encode()
	.into()
}

/// Calldata for `getOrder(id)`.
pub fn get_order_calldata(order_id: OrderId) -> Bytes {
	contracts::ISettlerInbox::getOrderCall { id: order_id }
		.abi_encode()
		.into()
}

/// Decode the `getOrder` return into the resolved order and state view.
pub fn decode_get_order_return(data: &[u8]) -> Result<(ResolvedOrder, OrderStateView), CodecError> {
	let ret = contracts::ISettlerInbox::getOrderCall::abi_decode_returns(data)?;

	let wire = WireStatus::try_from(ret.state.status)?;
	let view = OrderStateView::new(
		wire.into(),
		ret.state.rejectReason,
		ret.state.timestamp,
		ret.state.updatedBy,
	);
	Ok((resolved_from_sol(ret.resolved), view))
}

/// Encode a `getOrder` return. The SDK only decodes this in production;
/// the encoder exists for fixtures and local simulation.
pub fn encode_get_order_return(
	resolved: &ResolvedOrder,
	status: WireStatus,
	reject_reason: u8,
	timestamp: u32,
	updated_by: Address,
) -> Bytes {
	let state = contracts::OrderState {
		status: status as u8,
		rejectReason: reject_reason,
		timestamp,
		updatedBy: updated_by,
	};
	(
		resolved_to_sol(resolved),
		state,
		alloy::primitives::aliases::U248::ZERO,
	)
		.abi_encode_params()
		.into()
}

/// Topic-0 signature of the `Open` event.
pub fn open_event_signature() -> Bytes32 {
	contracts::ISettlerInbox::Open::SIGNATURE_HASH
}

/// Decode an `Open` log into the domain model.
pub fn decode_open_event(topics: &[Bytes32], data: &[u8]) -> Result<OpenEvent, CodecError> {
	let event = contracts::ISettlerInbox::Open::decode_raw_log(topics.iter().copied(), data)
		.map_err(|_| CodecError::EventMismatch("Open"))?;
	Ok(OpenEvent {
		order_id: event.orderId,
		resolved: resolved_from_sol(event.resolvedOrder),
	})
}

/// Encode an `Open` log (topics, data) for fixtures and local simulation.
pub fn encode_open_event(resolved: &ResolvedOrder) -> (Vec<Bytes32>, Bytes) {
	let event = contracts::ISettlerInbox::Open {
		orderId: resolved.order_id,
		resolvedOrder: resolved_to_sol(resolved),
	};
	let log = event.encode_log_data();
	(log.topics().to_vec(), log.data)
}

/// Topic-0 signature of the `Rejected` event.
pub fn rejected_event_signature() -> Bytes32 {
	contracts::ISettlerInbox::Rejected::SIGNATURE_HASH
}

/// Decode a `Rejected` log into the domain model.
pub fn decode_rejected_event(topics: &[Bytes32], data: &[u8]) -> Result<RejectedEvent, CodecError> {
	let event = contracts::ISettlerInbox::Rejected::decode_raw_log(topics.iter().copied(), data)
		.map_err(|_| CodecError::EventMismatch("Rejected"))?;
	Ok(RejectedEvent {
		order_id: event.id,
		by: event.by,
		reason: event.reason,
	})
}

pub fn resolved_to_sol(resolved: &ResolvedOrder) -> contracts::ResolvedCrossChainOrder {
	contracts::ResolvedCrossChainOrder {
		user: resolved.user,
		originChainId: resolved.origin_chain_id,
		openDeadline: resolved.open_deadline,
		fillDeadline: resolved.fill_deadline,
		orderId: resolved.order_id,
		maxSpent: outputs_to_sol(&resolved.max_spent),
		minReceived: outputs_to_sol(&resolved.min_received),
		fillInstructions: resolved
			.fill_instructions
			.iter()
			.map(|inst| contracts::FillInstruction {
				destinationChainId: inst.destination_chain_id.0,
				destinationSettler: inst.destination_settler,
				originData: inst.origin_data.clone(),
			})
			.collect(),
	}
}

pub fn resolved_from_sol(resolved: contracts::ResolvedCrossChainOrder) -> ResolvedOrder {
	ResolvedOrder {
		user: resolved.user,
		origin_chain_id: resolved.originChainId,
		open_deadline: resolved.openDeadline,
		fill_deadline: resolved.fillDeadline,
		order_id: resolved.orderId,
		max_spent: outputs_from_sol(resolved.maxSpent),
		min_received: outputs_from_sol(resolved.minReceived),
		fill_instructions: resolved
			.fillInstructions
			.into_iter()
			.map(|inst| FillInstruction {
				destination_chain_id: ChainId(inst.destinationChainId),
				destination_settler: inst.destinationSettler,
				origin_data: inst.originData,
			})
			.collect(),
	}
}

fn outputs_to_sol(outputs: &[Output]) -> Vec<contracts::Output> {
	outputs
		.iter()
		.map(|output| contracts::Output {
			token: output.token,
			amount: output.amount,
			recipient: output.recipient,
			chainId: output.chain_id,
		})
		.collect()
}

fn outputs_from_sol(outputs: Vec<contracts::Output>) -> Vec<Output> {
	outputs
		.into_iter()
		.map(|output| Output {
			token: output.token,
			amount: output.amount,
			recipient: output.recipient,
			chain_id: output.chainId,
		})
		.collect()
}
