//! Destination outbox surface: the `didFill` view and the `Filled` event.

use crate::{contracts, error::CodecError};
use alloy::sol_types::{SolCall, SolEvent, SolValue};
use sdk_types::{Address, Bytes, Bytes32, OrderId};

/// Filled event decoded into the domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledEvent {
	pub order_id: OrderId,
	pub fill_hash: Bytes32,
	pub filled_by: Address,
}

/// Calldata for `didFill(orderId, originData)`.
pub fn did_fill_calldata(order_id: OrderId, origin_data: &[u8]) -> Bytes {
	contracts::ISettlerOutbox::didFillCall {
		orderId: order_id,
		originData: origin_data.to_vec().into(),
	}
	.abi_encode()
	.into()
}

/// Decode the `didFill` boolean return.
pub fn decode_did_fill_return(data: &[u8]) -> Result<bool, CodecError> {
	Ok(contracts::ISettlerOutbox::didFillCall::abi_decode_returns(
		data,
	)?)
}

/// Encode a `didFill` return, for fixtures and local simulation.
pub fn encode_did_fill_return(filled: bool) -> Bytes {
	filled.abi_encode().into()
}

/// Topic-0 signature of the `Filled` event.
pub fn filled_event_signature() -> Bytes32 {
	contracts::ISettlerOutbox::Filled::SIGNATURE_HASH
}

/// Decode a `Filled` log into the domain model.
pub fn decode_filled_event(topics: &[Bytes32], data: &[u8]) -> Result<FilledEvent, CodecError> {
	let event = contracts::ISettlerOutbox::Filled::decode_raw_log(topics.iter().copied(), data)
		.map_err(|_| CodecError::EventMismatch("Filled"))?;
	Ok(FilledEvent {
		order_id: event.orderId,
		fill_hash: event.fillHash,
		filled_by: event.filledBy,
	})
}

/// Encode a `Filled` log (topics, data), for fixtures and local simulation.
pub fn encode_filled_event(
	order_id: OrderId,
	fill_hash: Bytes32,
	filled_by: Address,
) -> (Vec<Bytes32>, Bytes) {
	let event = contracts::ISettlerOutbox::Filled {
		orderId: order_id,
		fillHash: fill_hash,
		filledBy: filled_by,
	};
	let log = event.encode_log_data();
	(log.topics().to_vec(), log.data)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fill::fill_hash;

	#[test]
	fn test_did_fill_return_round_trip() {
		assert!(decode_did_fill_return(&encode_did_fill_return(true)).unwrap());
		assert!(!decode_did_fill_return(&encode_did_fill_return(false)).unwrap());
	}

	#[test]
	fn test_did_fill_calldata_has_selector() {
		let calldata = did_fill_calldata(OrderId::repeat_byte(0x01), &[1, 2, 3]);
		assert_eq!(
			&calldata[..4],
			contracts::ISettlerOutbox::didFillCall::SELECTOR.as_slice()
		);
	}

	#[test]
	fn test_filled_event_round_trip() {
		let order_id = OrderId::repeat_byte(0x42);
		let origin_data = vec![0xde, 0xad];
		let hash = fill_hash(order_id, &origin_data);
		let filler = Address::from([7u8; 20]);

		let (topics, data) = encode_filled_event(order_id, hash, filler);
		assert_eq!(topics[0], filled_event_signature());
		assert_eq!(topics[1], order_id);

		let event = decode_filled_event(&topics, &data).unwrap();
		assert_eq!(event.order_id, order_id);
		assert_eq!(event.fill_hash, hash);
		assert_eq!(event.filled_by, filler);
	}
}
