//! The origin tracker: submit, open wait, close wait.

use crate::TrackError;
use sdk_chains::{ChainAdapter, LogFilter, Transaction};
use sdk_codec::inbox::{
	decode_get_order_return, decode_open_event, get_order_calldata, open_calldata,
	open_event_signature, OpenEvent,
};
use sdk_destination::{CorrelateError, DestinationCorrelator, FillObservation, FillWatch};
use sdk_types::{
	merge_status, reject_reason_description, Address, CancelToken, ConflictingObservation,
	FillInstruction, OnchainOrder, OrderId, OrderStateView, OrderStatus, PollPolicy,
	ResolvedOrder, StatusMerge, U256,
};
use std::{
	sync::Arc,
	time::{Duration, Instant},
};
use tokio::sync::broadcast;
use tracing::{debug, info};

/// One wait's pacing state: deadline, growing interval, cancellation.
struct Waiter {
	policy: PollPolicy,
	deadline: Instant,
	interval: Duration,
	cancel: broadcast::Receiver<()>,
}

impl Waiter {
	fn new(policy: &PollPolicy, cancel: &CancelToken) -> Self {
		Self {
			policy: policy.clone(),
			deadline: Instant::now() + policy.timeout,
			interval: policy.interval,
			cancel: cancel.subscribe(),
		}
	}

	/// Sleep until the next observation. No lock is held across this await.
	async fn pause(&mut self) -> Result<(), TrackError> {
		let now = Instant::now();
		if now >= self.deadline {
			return Err(TrackError::Timeout);
		}
		let sleep_for = self.interval.min(self.deadline - now);
		tokio::select! {
			_ = tokio::time::sleep(sleep_for) => {}
			_ = self.cancel.recv() => return Err(TrackError::Cancelled),
		}
		self.interval = self.policy.next_interval(self.interval);
		Ok(())
	}
}

/// Cross-check a terminal non-fill claim from the origin against the
/// destination: a verified fill contradicting it is a conflict, never
/// silently dropped.
async fn ensure_unfilled(
	correlator: &DestinationCorrelator,
	watch: &mut FillWatch,
	order_id: OrderId,
	instruction: &FillInstruction,
	origin_claim: String,
) -> Result<(), TrackError> {
	if let FillObservation::Filled(record) = correlator.verify(watch, order_id, instruction).await?
	{
		return Err(ConflictingObservation {
			order_id,
			first: origin_claim,
			second: format!("destination filled by {}", record.filled_by),
		}
		.into());
	}
	Ok(())
}

/// Tracks orders against one origin-chain settler inbox.
pub struct OriginTracker {
	chain: Arc<dyn ChainAdapter>,
	inbox: Address,
}

impl OriginTracker {
	pub fn new(chain: Arc<dyn ChainAdapter>, inbox: Address) -> Self {
		Self { chain, inbox }
	}

	async fn read_order(
		&self,
		order_id: OrderId,
	) -> Result<(ResolvedOrder, OrderStateView), TrackError> {
		let returned = self
			.chain
			.call(self.inbox, get_order_calldata(order_id))
			.await?;
		Ok(decode_get_order_return(&returned)?)
	}

	/// Submit an open transaction and wait for its receipt.
	///
	/// The order id is only knowable from the mined `Open` event; a receipt
	/// without one is an error, not a silent success.
	pub async fn submit(
		&self,
		order: &OnchainOrder,
		value: U256,
		policy: &PollPolicy,
		cancel: &CancelToken,
	) -> Result<OpenEvent, TrackError> {
		let tx = Transaction {
			to: self.inbox,
			value,
			data: open_calldata(order),
		};
		let tx_hash = self.chain.submit_transaction(tx).await?;
		info!(tx = %tx_hash, inbox = %self.inbox, "submitted open transaction");

		let mut waiter = Waiter::new(policy, cancel);
		let receipt = loop {
			if let Some(receipt) = self.chain.transaction_receipt(tx_hash).await? {
				break receipt;
			}
			waiter.pause().await?;
		};

		if !receipt.success {
			return Err(TrackError::OpenReverted(tx_hash));
		}

		for log in &receipt.logs {
			if log.address != self.inbox {
				continue;
			}
			if log.topics.first() != Some(&open_event_signature()) {
				continue;
			}
			let event = decode_open_event(&log.topics, &log.data)?;
			info!(order = %event.order_id, "order opened");
			return Ok(event);
		}

		Err(TrackError::MissingOpenEvent(tx_hash))
	}

	/// Wait until the inbox knows the order, returning its resolved form.
	///
	/// The view function covers anything mined before the wait began; `Open`
	/// logs cover opens that land while waiting. Either signal completes the
	/// wait, including an immediate rejection (the caller sees the rejected
	/// state from the close wait).
	pub async fn wait_for_open(
		&self,
		order_id: OrderId,
		policy: &PollPolicy,
		cancel: &CancelToken,
	) -> Result<ResolvedOrder, TrackError> {
		let mut waiter = Waiter::new(policy, cancel);
		let mut cursor = self.chain.block_number().await?;

		loop {
			let (resolved, view) = self.read_order(order_id).await?;
			if view.status != OrderStatus::Unknown {
				debug!(order = %order_id, status = %view.status, "order visible on origin");
				return Ok(resolved);
			}

			let head = self.chain.block_number().await?;
			if head >= cursor {
				let filter = LogFilter {
					address: Some(self.inbox),
					topics: vec![Some(open_event_signature()), Some(order_id)],
					from_block: cursor,
					to_block: head,
				};
				for log in self.chain.get_logs(&filter).await? {
					let event = match decode_open_event(&log.topics, &log.data) {
						Ok(event) => event,
						Err(_) => continue,
					};
					if event.order_id == order_id {
						return Ok(event.resolved);
					}
				}
				cursor = head + 1;
			}

			waiter.pause().await?;
		}
	}

	/// Wait for a terminal state: filled, rejected, or expired.
	///
	/// Interleaves three observations per round: the origin view (merged
	/// monotonically), the destination fill proof, and the origin chain
	/// clock against the fill deadline. A destination-verified fill is
	/// returned even while the origin view lags behind it; a rejection or
	/// expiry is cross-checked against the destination before it is
	/// reported.
	pub async fn wait_for_close(
		&self,
		resolved: &ResolvedOrder,
		correlator: &DestinationCorrelator,
		policy: &PollPolicy,
		cancel: &CancelToken,
	) -> Result<OrderStateView, TrackError> {
		let order_id = resolved.order_id;
		let instruction = resolved
			.fill_instructions
			.first()
			.ok_or(CorrelateError::NoFillInstructions)?
			.clone();
		let mut watch = correlator.start_watch(resolved).await?;
		let mut waiter = Waiter::new(policy, cancel);
		let mut current = OrderStatus::Opened;

		loop {
			let (_, view) = self.read_order(order_id).await?;
			match merge_status(current, view.status) {
				StatusMerge::Advanced => {
					current = view.status;
					debug!(order = %order_id, status = %current, "origin status advanced");
				}
				StatusMerge::Stale => {}
				StatusMerge::Conflict => {
					return Err(ConflictingObservation {
						order_id,
						first: format!("tracked status {}", current),
						second: format!("origin view reports {}", view.status),
					}
					.into());
				}
			}

			match current {
				OrderStatus::Filled => return Ok(view),
				OrderStatus::Expired => {
					ensure_unfilled(
						correlator,
						&mut watch,
						order_id,
						&instruction,
						"origin expired".to_string(),
					)
					.await?;
					return Ok(view);
				}
				OrderStatus::Rejected => {
					ensure_unfilled(
						correlator,
						&mut watch,
						order_id,
						&instruction,
						format!(
							"origin rejected ({})",
							reject_reason_description(view.reject_reason().unwrap_or(0))
						),
					)
					.await?;
					return Ok(view);
				}
				_ => {}
			}

			// The destination proof usually lands before the origin view
			// reflects the fill.
			if let FillObservation::Filled(record) =
				correlator.verify(&mut watch, order_id, &instruction).await?
			{
				info!(order = %order_id, filler = %record.filled_by, "fill verified on destination");
				return Ok(OrderStateView::new(
					OrderStatus::Filled,
					0,
					view.timestamp,
					record.filled_by,
				));
			}

			// Deadline is judged by origin chain time, never the local clock.
			let now = self.chain.latest_timestamp().await?;
			if now > u64::from(resolved.fill_deadline) {
				let (_, final_view) = self.read_order(order_id).await?;
				if final_view.status == OrderStatus::Filled {
					return Ok(final_view);
				}
				ensure_unfilled(
					correlator,
					&mut watch,
					order_id,
					&instruction,
					"fill deadline elapsed on origin".to_string(),
				)
				.await?;
				if final_view.status.is_terminal() {
					return Ok(final_view);
				}
				let timestamp = u32::try_from(now).unwrap_or(u32::MAX);
				return Ok(OrderStateView::new(
					OrderStatus::Expired,
					0,
					timestamp,
					Address::ZERO,
				));
			}

			waiter.pause().await?;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::sol_types::SolCall;
	use async_trait::async_trait;
	use sdk_chains::{ChainError, ChainRegistry, Log, TransactionReceipt};
	use sdk_codec::{
		contracts::ISettlerInbox,
		fill_hash,
		inbox::{encode_get_order_return, encode_open_event},
		outbox::{encode_did_fill_return, encode_filled_event},
	};
	use sdk_types::{
		address_to_bytes32, BlockNumber, Bytes, Bytes32, ChainId, FillInstruction, Timestamp,
		TxHash, WireStatus,
	};
	use std::sync::Mutex;

	const INBOX: Address = Address::repeat_byte(0xaa);
	const OUTBOX: Address = Address::repeat_byte(0xbb);

	fn sample_resolved() -> ResolvedOrder {
		ResolvedOrder {
			user: Address::from([1u8; 20]),
			origin_chain_id: U256::from(1u64),
			open_deadline: 1_700_000_060,
			fill_deadline: 2_000_000_000,
			order_id: OrderId::repeat_byte(0x42),
			max_spent: vec![],
			min_received: vec![],
			fill_instructions: vec![FillInstruction {
				destination_chain_id: ChainId::OPTIMISM,
				destination_settler: address_to_bytes32(OUTBOX),
				origin_data: Bytes::from(vec![0xde, 0xad]),
			}],
		}
	}

	fn fast_policy() -> PollPolicy {
		PollPolicy {
			interval: Duration::from_millis(10),
			max_interval: Duration::from_millis(20),
			timeout: Duration::from_secs(2),
		}
	}

	struct MockOrigin {
		state: Mutex<(ResolvedOrder, WireStatus, u8)>,
		timestamp: Mutex<Timestamp>,
		head: Mutex<BlockNumber>,
		logs: Mutex<Vec<Log>>,
		receipt: Mutex<Option<TransactionReceipt>>,
	}

	impl MockOrigin {
		fn with_status(status: WireStatus) -> Arc<Self> {
			Arc::new(Self {
				state: Mutex::new((sample_resolved(), status, 0)),
				timestamp: Mutex::new(1_700_000_000),
				head: Mutex::new(100),
				logs: Mutex::new(vec![]),
				receipt: Mutex::new(None),
			})
		}

		fn set_status(&self, status: WireStatus, reason: u8) {
			let mut state = self.state.lock().unwrap();
			state.1 = status;
			state.2 = reason;
		}

		fn set_timestamp(&self, timestamp: Timestamp) {
			*self.timestamp.lock().unwrap() = timestamp;
		}

		fn emit_open(&self, resolved: &ResolvedOrder) {
			let block = {
				let mut head = self.head.lock().unwrap();
				*head += 1;
				*head
			};
			let (topics, data) = encode_open_event(resolved);
			self.logs.lock().unwrap().push(Log {
				address: INBOX,
				topics,
				data,
				block_number: block,
				transaction_hash: TxHash::repeat_byte(0x77),
				log_index: 0,
			});
		}

		fn set_receipt(&self, receipt: TransactionReceipt) {
			*self.receipt.lock().unwrap() = Some(receipt);
		}
	}

	#[async_trait]
	impl ChainAdapter for MockOrigin {
		fn chain_id(&self) -> ChainId {
			ChainId::ETHEREUM
		}
		fn confirmations(&self) -> u64 {
			1
		}
		async fn block_number(&self) -> Result<BlockNumber, ChainError> {
			Ok(*self.head.lock().unwrap())
		}
		async fn block_timestamp(&self, _: BlockNumber) -> Result<Timestamp, ChainError> {
			Ok(*self.timestamp.lock().unwrap())
		}
		async fn call(&self, _: Address, data: Bytes) -> Result<Bytes, ChainError> {
			assert_eq!(&data[..4], ISettlerInbox::getOrderCall::SELECTOR.as_slice());
			let (resolved, status, reason) = self.state.lock().unwrap().clone();
			let timestamp = *self.timestamp.lock().unwrap() as u32;
			Ok(encode_get_order_return(
				&resolved,
				status,
				reason,
				timestamp,
				Address::ZERO,
			))
		}
		async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<Log>, ChainError> {
			Ok(self
				.logs
				.lock()
				.unwrap()
				.iter()
				.filter(|log| log.block_number >= filter.from_block)
				.filter(|log| log.block_number <= filter.to_block)
				.cloned()
				.collect())
		}
		async fn submit_transaction(&self, _: Transaction) -> Result<TxHash, ChainError> {
			Ok(TxHash::repeat_byte(0x11))
		}
		async fn transaction_receipt(
			&self,
			_: TxHash,
		) -> Result<Option<TransactionReceipt>, ChainError> {
			Ok(self.receipt.lock().unwrap().clone())
		}
	}

	struct MockDestination {
		did_fill: Mutex<bool>,
		logs: Mutex<Vec<Log>>,
		head: Mutex<BlockNumber>,
	}

	impl MockDestination {
		fn unfilled() -> Arc<Self> {
			Arc::new(Self {
				did_fill: Mutex::new(false),
				logs: Mutex::new(vec![]),
				head: Mutex::new(200),
			})
		}

		fn set_filled(&self, filled: bool) {
			*self.did_fill.lock().unwrap() = filled;
		}

		fn emit_filled(&self, order_id: OrderId, hash: Bytes32, filler: Address) {
			let block = {
				let mut head = self.head.lock().unwrap();
				*head += 1;
				*head
			};
			let (topics, data) = encode_filled_event(order_id, hash, filler);
			self.logs.lock().unwrap().push(Log {
				address: OUTBOX,
				topics,
				data,
				block_number: block,
				transaction_hash: TxHash::repeat_byte(0x88),
				log_index: 0,
			});
		}
	}

	#[async_trait]
	impl ChainAdapter for MockDestination {
		fn chain_id(&self) -> ChainId {
			ChainId::OPTIMISM
		}
		fn confirmations(&self) -> u64 {
			1
		}
		async fn block_number(&self) -> Result<BlockNumber, ChainError> {
			Ok(*self.head.lock().unwrap())
		}
		async fn block_timestamp(&self, _: BlockNumber) -> Result<Timestamp, ChainError> {
			Ok(0)
		}
		async fn call(&self, _: Address, _: Bytes) -> Result<Bytes, ChainError> {
			Ok(encode_did_fill_return(*self.did_fill.lock().unwrap()))
		}
		async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<Log>, ChainError> {
			Ok(self
				.logs
				.lock()
				.unwrap()
				.iter()
				.filter(|log| log.block_number >= filter.from_block)
				.filter(|log| log.block_number <= filter.to_block)
				.cloned()
				.collect())
		}
		async fn submit_transaction(&self, _: Transaction) -> Result<TxHash, ChainError> {
			Err(ChainError::NoSigner(ChainId::OPTIMISM))
		}
		async fn transaction_receipt(
			&self,
			_: TxHash,
		) -> Result<Option<TransactionReceipt>, ChainError> {
			Ok(None)
		}
	}

	fn correlator_over(destination: Arc<MockDestination>) -> DestinationCorrelator {
		let mut registry = ChainRegistry::new();
		registry.register(destination).unwrap();
		DestinationCorrelator::new(Arc::new(registry))
	}

	fn sample_order() -> OnchainOrder {
		OnchainOrder {
			fill_deadline: 2_000_000_000,
			order_data_type: Bytes32::repeat_byte(0x01),
			order_data: Bytes::from(vec![0u8; 32]),
		}
	}

	#[tokio::test]
	async fn test_submit_recovers_order_from_receipt() {
		let origin = MockOrigin::with_status(WireStatus::Pending);
		let resolved = sample_resolved();
		let (topics, data) = encode_open_event(&resolved);
		origin.set_receipt(TransactionReceipt {
			transaction_hash: TxHash::repeat_byte(0x11),
			block_number: 101,
			success: true,
			logs: vec![Log {
				address: INBOX,
				topics,
				data,
				block_number: 101,
				transaction_hash: TxHash::repeat_byte(0x11),
				log_index: 0,
			}],
		});

		let tracker = OriginTracker::new(origin, INBOX);
		let event = tracker
			.submit(
				&sample_order(),
				U256::ZERO,
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		assert_eq!(event.order_id, resolved.order_id);
		assert_eq!(event.resolved, resolved);
	}

	#[tokio::test]
	async fn test_submit_reverted() {
		let origin = MockOrigin::with_status(WireStatus::Invalid);
		origin.set_receipt(TransactionReceipt {
			transaction_hash: TxHash::repeat_byte(0x11),
			block_number: 101,
			success: false,
			logs: vec![],
		});

		let tracker = OriginTracker::new(origin, INBOX);
		let result = tracker
			.submit(
				&sample_order(),
				U256::ZERO,
				&fast_policy(),
				&CancelToken::new(),
			)
			.await;
		assert!(matches!(result, Err(TrackError::OpenReverted(_))));
	}

	#[tokio::test]
	async fn test_submit_without_open_event() {
		let origin = MockOrigin::with_status(WireStatus::Invalid);
		origin.set_receipt(TransactionReceipt {
			transaction_hash: TxHash::repeat_byte(0x11),
			block_number: 101,
			success: true,
			logs: vec![],
		});

		let tracker = OriginTracker::new(origin, INBOX);
		let result = tracker
			.submit(
				&sample_order(),
				U256::ZERO,
				&fast_policy(),
				&CancelToken::new(),
			)
			.await;
		assert!(matches!(result, Err(TrackError::MissingOpenEvent(_))));
	}

	#[tokio::test]
	async fn test_wait_for_open_via_view() {
		let origin = MockOrigin::with_status(WireStatus::Pending);
		let tracker = OriginTracker::new(origin, INBOX);

		let resolved = tracker
			.wait_for_open(
				sample_resolved().order_id,
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		assert_eq!(resolved, sample_resolved());
	}

	#[tokio::test]
	async fn test_wait_for_open_via_event() {
		let origin = MockOrigin::with_status(WireStatus::Invalid);
		let tracker = OriginTracker::new(origin.clone(), INBOX);

		let emitter = origin.clone();
		tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(30)).await;
			emitter.emit_open(&sample_resolved());
		});

		let resolved = tracker
			.wait_for_open(
				sample_resolved().order_id,
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		assert_eq!(resolved.order_id, sample_resolved().order_id);
	}

	#[tokio::test]
	async fn test_wait_for_open_times_out() {
		let origin = MockOrigin::with_status(WireStatus::Invalid);
		let tracker = OriginTracker::new(origin, INBOX);

		let policy = fast_policy().with_timeout(Duration::from_millis(50));
		let result = tracker
			.wait_for_open(sample_resolved().order_id, &policy, &CancelToken::new())
			.await;
		assert!(matches!(result, Err(TrackError::Timeout)));
	}

	#[tokio::test]
	async fn test_wait_for_open_cancelled() {
		let origin = MockOrigin::with_status(WireStatus::Invalid);
		let tracker = OriginTracker::new(origin, INBOX);

		let cancel = CancelToken::new();
		let canceller = cancel.clone();
		tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(30)).await;
			canceller.cancel();
		});

		let result = tracker
			.wait_for_open(sample_resolved().order_id, &fast_policy(), &cancel)
			.await;
		assert!(matches!(result, Err(TrackError::Cancelled)));
	}

	#[tokio::test]
	async fn test_close_via_origin_view() {
		let origin = MockOrigin::with_status(WireStatus::Filled);
		let destination = MockDestination::unfilled();
		destination.set_filled(true);
		let tracker = OriginTracker::new(origin, INBOX);

		let view = tracker
			.wait_for_close(
				&sample_resolved(),
				&correlator_over(destination),
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		assert_eq!(view.status, OrderStatus::Filled);
	}

	#[tokio::test]
	async fn test_close_via_destination_proof() {
		// Origin view lags; the verified destination fill settles the wait.
		let origin = MockOrigin::with_status(WireStatus::Pending);
		let destination = MockDestination::unfilled();
		let tracker = OriginTracker::new(origin, INBOX);

		let resolved = sample_resolved();
		let filler = Address::from([0xcc; 20]);
		let hash = fill_hash(resolved.order_id, &resolved.fill_instructions[0].origin_data);
		destination.emit_filled(resolved.order_id, hash, filler);
		destination.set_filled(true);

		let view = tracker
			.wait_for_close(
				&resolved,
				&correlator_over(destination),
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		assert_eq!(view.status, OrderStatus::Filled);
		assert_eq!(view.updated_by, filler);
	}

	#[tokio::test]
	async fn test_close_rejected_carries_reason() {
		let origin = MockOrigin::with_status(WireStatus::Rejected);
		origin.set_status(WireStatus::Rejected, 4);
		let destination = MockDestination::unfilled();
		let tracker = OriginTracker::new(origin, INBOX);

		let view = tracker
			.wait_for_close(
				&sample_resolved(),
				&correlator_over(destination),
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		assert_eq!(view.status, OrderStatus::Rejected);
		assert_eq!(view.reject_reason(), Some(4));
	}

	#[tokio::test]
	async fn test_close_rejected_with_fill_is_conflict() {
		let origin = MockOrigin::with_status(WireStatus::Rejected);
		let destination = MockDestination::unfilled();
		destination.set_filled(true);
		let tracker = OriginTracker::new(origin, INBOX);

		let result = tracker
			.wait_for_close(
				&sample_resolved(),
				&correlator_over(destination),
				&fast_policy(),
				&CancelToken::new(),
			)
			.await;
		assert!(matches!(result, Err(TrackError::Conflict(_))));
	}

	#[tokio::test]
	async fn test_close_expired_with_fill_is_conflict() {
		// Origin closed the order as expired, yet the destination holds a
		// verified fill for it.
		let origin = MockOrigin::with_status(WireStatus::Closed);
		let destination = MockDestination::unfilled();
		let tracker = OriginTracker::new(origin, INBOX);

		let resolved = sample_resolved();
		let hash = fill_hash(resolved.order_id, &resolved.fill_instructions[0].origin_data);
		destination.emit_filled(resolved.order_id, hash, Address::from([0xcc; 20]));
		destination.set_filled(true);

		let result = tracker
			.wait_for_close(
				&resolved,
				&correlator_over(destination),
				&fast_policy(),
				&CancelToken::new(),
			)
			.await;
		assert!(matches!(result, Err(TrackError::Conflict(_))));
	}

	#[tokio::test]
	async fn test_close_expired_by_chain_clock() {
		let origin = MockOrigin::with_status(WireStatus::Pending);
		let destination = MockDestination::unfilled();
		let tracker = OriginTracker::new(origin.clone(), INBOX);

		let mut resolved = sample_resolved();
		resolved.fill_deadline = 1_000;
		origin.set_timestamp(2_000);

		let view = tracker
			.wait_for_close(
				&resolved,
				&correlator_over(destination),
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		// Expired, not a timeout: the deadline elapsed on-chain.
		assert_eq!(view.status, OrderStatus::Expired);
	}

	#[tokio::test]
	async fn test_close_prefers_view_close_over_synthesized_expiry() {
		// Deadline elapsed but the inbox already closed the order itself.
		let origin = MockOrigin::with_status(WireStatus::Pending);
		let destination = MockDestination::unfilled();
		let tracker = OriginTracker::new(origin.clone(), INBOX);

		let mut resolved = sample_resolved();
		resolved.fill_deadline = 1_000;
		origin.set_timestamp(2_000);
		origin.set_status(WireStatus::Closed, 0);

		let view = tracker
			.wait_for_close(
				&resolved,
				&correlator_over(destination),
				&fast_policy(),
				&CancelToken::new(),
			)
			.await
			.unwrap();
		assert_eq!(view.status, OrderStatus::Expired);
		assert!(view.timestamp > 0);
	}
}
