//! The chain adapter trait and its wire-neutral request/response types.

use crate::ChainError;
use async_trait::async_trait;
use sdk_types::{Address, BlockNumber, Bytes, Bytes32, ChainId, Timestamp, TxHash, U256};
use serde::{Deserialize, Serialize};

/// Transaction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
	pub to: Address,
	pub value: U256,
	pub data: Bytes,
}

/// Transaction receipt, including the logs needed for event parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt {
	pub transaction_hash: TxHash,
	pub block_number: BlockNumber,
	pub success: bool,
	pub logs: Vec<Log>,
}

/// Basic log structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
	pub address: Address,
	pub topics: Vec<Bytes32>,
	pub data: Bytes,
	pub block_number: BlockNumber,
	pub transaction_hash: TxHash,
	pub log_index: u64,
}

/// Log query over a bounded block window.
#[derive(Debug, Clone)]
pub struct LogFilter {
	pub address: Option<Address>,
	/// Positional topic filters; `None` matches anything.
	pub topics: Vec<Option<Bytes32>>,
	pub from_block: BlockNumber,
	pub to_block: BlockNumber,
}

/// Adapter for interacting with one chain.
///
/// Implementations must be safe for concurrent use; many order flows share
/// one adapter handle and only ever read through it (submission is the one
/// write path and carries no adapter-side state).
#[async_trait]
pub trait ChainAdapter: Send + Sync {
	/// Get the chain ID
	fn chain_id(&self) -> ChainId;

	/// Confirmation depth the caller's finality policy dictates for this chain
	fn confirmations(&self) -> u64;

	/// Get current block number
	async fn block_number(&self) -> Result<BlockNumber, ChainError>;

	/// Get a block's timestamp
	async fn block_timestamp(&self, block: BlockNumber) -> Result<Timestamp, ChainError>;

	/// Call a contract function (read-only)
	async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError>;

	/// Get logs matching a filter
	async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<Log>, ChainError>;

	/// Submit a transaction
	async fn submit_transaction(&self, tx: Transaction) -> Result<TxHash, ChainError>;

	/// Get a transaction receipt, `None` while unmined
	async fn transaction_receipt(
		&self,
		hash: TxHash,
	) -> Result<Option<TransactionReceipt>, ChainError>;

	/// Timestamp of the latest block — the chain clock used for deadline
	/// checks (never the local clock).
	async fn latest_timestamp(&self) -> Result<Timestamp, ChainError> {
		let block = self.block_number().await?;
		self.block_timestamp(block).await
	}
}
