//! Configuration types for the SDK.

use crate::serde_helpers::chain_id_map;
use sdk_types::{Address, ChainId, PollPolicy};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, time::Duration};

/// Per-network settings: RPC endpoint, finality depth, and the settlement
/// contract addresses deployed on that chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	/// Human-readable name, used only in logs.
	pub name: String,
	pub rpc_url: String,
	#[serde(default = "default_confirmations")]
	pub confirmations: u64,
	/// Settler inbox address (origin-chain entry point).
	pub inbox: Address,
	/// Settler outbox address (destination-chain fill target).
	pub outbox: Address,
	/// Solver executor, present only on chains where fills are executed.
	#[serde(default)]
	pub executor: Option<Address>,
}

fn default_confirmations() -> u64 {
	1
}

/// Timing knobs for the order lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
	/// Total budget for one open-to-close flow, in seconds.
	#[serde(default = "default_total_timeout")]
	pub total_timeout_secs: u64,
	/// Fraction of the total budget spent waiting for the open to confirm;
	/// the remainder goes to the fill wait. Must be in (0, 1).
	#[serde(default = "default_open_fraction")]
	pub open_fraction: f64,
	#[serde(default = "default_poll_interval")]
	pub poll_interval_secs: u64,
	#[serde(default = "default_max_poll_interval")]
	pub max_poll_interval_secs: u64,
}

fn default_total_timeout() -> u64 {
	600
}

fn default_open_fraction() -> f64 {
	0.25
}

fn default_poll_interval() -> u64 {
	2
}

fn default_max_poll_interval() -> u64 {
	30
}

impl Default for FlowConfig {
	fn default() -> Self {
		Self {
			total_timeout_secs: default_total_timeout(),
			open_fraction: default_open_fraction(),
			poll_interval_secs: default_poll_interval(),
			max_poll_interval_secs: default_max_poll_interval(),
		}
	}
}

impl FlowConfig {
	/// Poll policy covering the full flow budget.
	pub fn poll_policy(&self) -> PollPolicy {
		PollPolicy {
			interval: Duration::from_secs(self.poll_interval_secs),
			max_interval: Duration::from_secs(self.max_poll_interval_secs),
			timeout: Duration::from_secs(self.total_timeout_secs),
		}
	}
}

/// Root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfig {
	#[serde(default, with = "chain_id_map")]
	pub networks: HashMap<ChainId, NetworkConfig>,
	#[serde(default)]
	pub flow: FlowConfig,
}

impl SdkConfig {
	pub fn network(&self, chain_id: ChainId) -> Option<&NetworkConfig> {
		self.networks.get(&chain_id)
	}
}
