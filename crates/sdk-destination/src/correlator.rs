//! Fill correlation against the destination settler.

use crate::CorrelateError;
use sdk_chains::{ChainAdapter, ChainRegistry, LogFilter};
use sdk_codec::{
	fill_hash,
	outbox::{decode_did_fill_return, did_fill_calldata, decode_filled_event, filled_event_signature},
};
use sdk_types::{
	bytes32_to_address, Address, BlockNumber, ChainId, ConflictingObservation, FillInstruction,
	FillRecord, OrderId, ResolvedOrder,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a resolved order's fill must land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillLocation {
	pub chain_id: ChainId,
	pub settler: Address,
}

/// One order's watch over its destination settler.
///
/// Holds the log cursor; `from_block` only moves forward, so a log is never
/// scanned twice within one watch.
pub struct FillWatch {
	chain: Arc<dyn ChainAdapter>,
	settler: Address,
	from_block: BlockNumber,
}

impl FillWatch {
	pub fn chain_id(&self) -> ChainId {
		self.chain.chain_id()
	}
}

/// Outcome of one fill check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillObservation {
	Filled(FillRecord),
	NotFilled,
}

/// Correlates origin-chain orders with destination-chain fills.
pub struct DestinationCorrelator {
	chains: Arc<ChainRegistry>,
}

impl DestinationCorrelator {
	pub fn new(chains: Arc<ChainRegistry>) -> Self {
		Self { chains }
	}

	/// Resolve the fill target from a resolved order's instructions.
	///
	/// Repeated identical instructions are tolerated (some settlers emit the
	/// instruction once per output); two differing instructions are not.
	pub fn locate(&self, resolved: &ResolvedOrder) -> Result<FillLocation, CorrelateError> {
		let first = resolved
			.fill_instructions
			.first()
			.ok_or(CorrelateError::NoFillInstructions)?;

		if resolved.fill_instructions.iter().any(|i| i != first) {
			return Err(CorrelateError::InconsistentInstructions);
		}

		let settler = bytes32_to_address(&first.destination_settler)?;
		Ok(FillLocation {
			chain_id: first.destination_chain_id,
			settler,
		})
	}

	/// Begin watching the destination settler for this order's fill.
	///
	/// The log cursor starts at the current destination block. Fills mined
	/// before the watch existed are still caught: `didFill` is consulted on
	/// every check and does not depend on the cursor.
	pub async fn start_watch(&self, resolved: &ResolvedOrder) -> Result<FillWatch, CorrelateError> {
		let location = self.locate(resolved)?;
		let chain = self.chains.get_required(location.chain_id)?;
		let from_block = chain.block_number().await?;
		debug!(
			order = %resolved.order_id,
			chain = %location.chain_id,
			settler = %location.settler,
			from_block,
			"started fill watch"
		);

		Ok(FillWatch {
			chain,
			settler: location.settler,
			from_block,
		})
	}

	/// Check once whether the instruction has been executed.
	///
	/// Scans `Filled` logs since the cursor for the expected fill hash, then
	/// asks `didFill`. The view function is authoritative in both directions:
	/// a matching event without view confirmation is a conflict, and a view
	/// confirmation without an event is a fill with an unknown filler.
	pub async fn verify(
		&self,
		watch: &mut FillWatch,
		order_id: OrderId,
		instruction: &FillInstruction,
	) -> Result<FillObservation, CorrelateError> {
		let expected_hash = fill_hash(order_id, &instruction.origin_data);
		// Logs are only read at the caller's confirmation depth.
		let head = watch.chain.block_number().await?;
		let to_block = head.saturating_sub(watch.chain.confirmations().saturating_sub(1));

		let mut event_filler = None;
		if to_block >= watch.from_block {
			let filter = LogFilter {
				address: Some(watch.settler),
				topics: vec![Some(filled_event_signature()), Some(order_id)],
				from_block: watch.from_block,
				to_block,
			};

			for log in watch.chain.get_logs(&filter).await? {
				let event = match decode_filled_event(&log.topics, &log.data) {
					Ok(event) => event,
					// Foreign log under our filter; skip it.
					Err(_) => continue,
				};
				if event.order_id != order_id {
					continue;
				}
				// Same order, different instruction content. Not ours.
				if event.fill_hash != expected_hash {
					debug!(order = %order_id, "ignoring Filled event with foreign fill hash");
					continue;
				}
				event_filler = Some(event.filled_by);
				break;
			}

			// Cursor only advances; re-delivered logs become invisible.
			watch.from_block = to_block + 1;
		}

		let calldata = did_fill_calldata(order_id, &instruction.origin_data);
		let returned = watch.chain.call(watch.settler, calldata).await?;
		let filled = decode_did_fill_return(&returned)?;

		match (filled, event_filler) {
			(true, filler) => Ok(FillObservation::Filled(FillRecord {
				order_id,
				fill_hash: expected_hash,
				filled_by: filler.unwrap_or(Address::ZERO),
			})),
			(false, Some(filler)) => {
				warn!(order = %order_id, filler = %filler, "Filled event contradicts didFill view");
				Err(ConflictingObservation {
					order_id,
					first: format!("Filled event from {}", filler),
					second: "didFill reports unfilled".to_string(),
				}
				.into())
			}
			(false, None) => Ok(FillObservation::NotFilled),
		}
	}
}
