//! The caller-facing order flow.

use crate::FlowError;
use sdk_chains::ChainRegistry;
use sdk_codec::encode_order;
use sdk_config::SdkConfig;
use sdk_destination::DestinationCorrelator;
use sdk_origin::OriginTracker;
use sdk_types::{
	CancelToken, ChainId, OnchainOrder, OrderId, OrderIntent, OrderStateView, PollPolicy,
	ResolvedOrder, U256,
};
use std::{sync::Arc, time::Duration};
use tracing::info;

/// How one flow's total budget splits between its two waits.
#[derive(Debug, Clone, Copy)]
pub struct FlowTimeouts {
	pub total: Duration,
	/// Share of the total spent waiting for the open to confirm; the rest
	/// goes to the close wait. Must be in (0, 1).
	pub open_fraction: f64,
}

impl Default for FlowTimeouts {
	fn default() -> Self {
		Self {
			total: Duration::from_secs(600),
			open_fraction: 0.25,
		}
	}
}

impl FlowTimeouts {
	pub fn open_budget(&self) -> Duration {
		self.total.mul_f64(self.open_fraction)
	}

	pub fn close_budget(&self) -> Duration {
		self.total.saturating_sub(self.open_budget())
	}
}

/// Final outcome of one order flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowReport {
	pub resolved: ResolvedOrder,
	pub state: OrderStateView,
}

/// Drives orders from intent to terminal state.
pub struct OrderFlow {
	tracker: OriginTracker,
	correlator: DestinationCorrelator,
	policy: PollPolicy,
	timeouts: FlowTimeouts,
}

impl OrderFlow {
	pub fn new(
		tracker: OriginTracker,
		correlator: DestinationCorrelator,
		policy: PollPolicy,
		timeouts: FlowTimeouts,
	) -> Self {
		Self {
			tracker,
			correlator,
			policy,
			timeouts,
		}
	}

	/// Wire a flow from loaded configuration for one origin chain.
	pub fn from_config(
		config: &SdkConfig,
		origin: ChainId,
		chains: Arc<ChainRegistry>,
	) -> Result<Self, FlowError> {
		let network = config
			.network(origin)
			.ok_or(FlowError::UnknownNetwork(origin))?;
		let chain = chains.get_required(origin).map_err(FlowError::Chain)?;
		let tracker = OriginTracker::new(chain, network.inbox);
		let correlator = DestinationCorrelator::new(chains);
		let timeouts = FlowTimeouts {
			total: Duration::from_secs(config.flow.total_timeout_secs),
			open_fraction: config.flow.open_fraction,
		};
		Ok(Self::new(
			tracker,
			correlator,
			config.flow.poll_policy(),
			timeouts,
		))
	}

	/// Encode an intent into the canonical on-chain order tuple.
	pub fn generate_order(&self, intent: &OrderIntent) -> Result<OnchainOrder, FlowError> {
		Ok(encode_order(intent)?)
	}

	/// Open an order and drive it to a terminal state.
	///
	/// `value` is the native amount forwarded with the open transaction, for
	/// orders whose deposit is the chain's native asset.
	///
	/// There is no separate open wait here: the submit receipt carries the
	/// `Open` event, so the order is confirmed open the moment submission
	/// returns. Orders opened by someone else go through
	/// [`track_order`](Self::track_order), which does wait for the open.
	pub async fn open_order(
		&self,
		order: &OnchainOrder,
		value: U256,
		cancel: &CancelToken,
	) -> Result<FlowReport, FlowError> {
		let open_policy = self
			.policy
			.clone()
			.with_timeout(self.timeouts.open_budget());
		let event = self.tracker.submit(order, value, &open_policy, cancel).await?;
		self.close(event.resolved, cancel).await
	}

	/// Track an order someone else opened, by id, to its terminal state.
	pub async fn track_order(
		&self,
		order_id: OrderId,
		cancel: &CancelToken,
	) -> Result<FlowReport, FlowError> {
		let open_policy = self
			.policy
			.clone()
			.with_timeout(self.timeouts.open_budget());
		let resolved = self
			.tracker
			.wait_for_open(order_id, &open_policy, cancel)
			.await?;
		self.close(resolved, cancel).await
	}

	async fn close(
		&self,
		resolved: ResolvedOrder,
		cancel: &CancelToken,
	) -> Result<FlowReport, FlowError> {
		info!(order = %resolved.order_id, "waiting for terminal state");
		let close_policy = self
			.policy
			.clone()
			.with_timeout(self.timeouts.close_budget());
		let state = self
			.tracker
			.wait_for_close(&resolved, &self.correlator, &close_policy, cancel)
			.await?;
		info!(order = %resolved.order_id, status = %state.status, "order closed");
		Ok(FlowReport { resolved, state })
	}
}
