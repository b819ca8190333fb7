//! Alloy-backed HTTP chain adapter.
//!
//! Read paths work against any endpoint; submission requires a wallet at
//! construction time and fails with [`ChainError::NoSigner`] otherwise.
//! Signing itself is the wallet's concern — the SDK never touches keys
//! beyond handing them to the provider.

use crate::{
	adapter::{ChainAdapter, Log, LogFilter, Transaction, TransactionReceipt},
	ChainError,
};
use alloy::{
	network::{EthereumWallet, TransactionBuilder},
	providers::{DynProvider, Provider, ProviderBuilder},
	rpc::types::{Filter, TransactionRequest},
	signers::local::PrivateKeySigner,
	transports::http::reqwest::Url,
};
use async_trait::async_trait;
use sdk_types::{Address, BlockNumber, Bytes, ChainId, Timestamp, TxHash};
use tracing::debug;

pub struct HttpChain {
	chain_id: ChainId,
	confirmations: u64,
	provider: DynProvider,
	can_send: bool,
}

impl HttpChain {
	/// Read-only adapter. Sufficient for everything except `submit`.
	pub fn connect(chain_id: ChainId, rpc_url: &str, confirmations: u64) -> Result<Self, ChainError> {
		let url = parse_url(rpc_url)?;
		let provider = ProviderBuilder::new().connect_http(url);
		debug!(chain = %chain_id, url = rpc_url, "connected read-only chain adapter");
		Ok(Self {
			chain_id,
			confirmations,
			provider: DynProvider::new(provider),
			can_send: false,
		})
	}

	/// Adapter with a signing wallet, able to submit transactions.
	pub fn connect_with_signer(
		chain_id: ChainId,
		rpc_url: &str,
		confirmations: u64,
		mut signer: PrivateKeySigner,
	) -> Result<Self, ChainError> {
		use alloy::signers::Signer;

		let url = parse_url(rpc_url)?;
		signer = signer.with_chain_id(Some(chain_id.0));
		let wallet = EthereumWallet::from(signer);
		let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);
		debug!(chain = %chain_id, url = rpc_url, "connected signing chain adapter");
		Ok(Self {
			chain_id,
			confirmations,
			provider: DynProvider::new(provider),
			can_send: true,
		})
	}
}

fn parse_url(rpc_url: &str) -> Result<Url, ChainError> {
	rpc_url
		.parse()
		.map_err(|e| ChainError::InvalidConfig(format!("invalid RPC URL: {}", e)))
}

fn unavailable(context: &str, err: impl std::fmt::Display) -> ChainError {
	ChainError::Unavailable(format!("{}: {}", context, err))
}

#[async_trait]
impl ChainAdapter for HttpChain {
	fn chain_id(&self) -> ChainId {
		self.chain_id
	}

	fn confirmations(&self) -> u64 {
		self.confirmations
	}

	async fn block_number(&self) -> Result<BlockNumber, ChainError> {
		self.provider
			.get_block_number()
			.await
			.map_err(|e| unavailable("failed to get block number", e))
	}

	async fn block_timestamp(&self, block: BlockNumber) -> Result<Timestamp, ChainError> {
		let block = self
			.provider
			.get_block_by_number(block.into())
			.await
			.map_err(|e| unavailable("failed to get block", e))?
			.ok_or_else(|| ChainError::Unavailable(format!("block {} not found", block)))?;
		Ok(block.header.timestamp)
	}

	async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
		let request = TransactionRequest::default()
			.with_to(to)
			.with_input(data);
		self.provider
			.call(request)
			.await
			.map_err(|e| unavailable("eth_call failed", e))
	}

	async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<Log>, ChainError> {
		let mut query = Filter::new()
			.from_block(filter.from_block)
			.to_block(filter.to_block);
		if let Some(address) = filter.address {
			query = query.address(address);
		}
		for (position, topic) in filter.topics.iter().enumerate() {
			if let Some(topic) = topic {
				query = match position {
					0 => query.event_signature(*topic),
					1 => query.topic1(*topic),
					2 => query.topic2(*topic),
					3 => query.topic3(*topic),
					_ => query,
				};
			}
		}

		let logs = self
			.provider
			.get_logs(&query)
			.await
			.map_err(|e| unavailable("eth_getLogs failed", e))?;
		Ok(logs.iter().map(convert_log).collect())
	}

	async fn submit_transaction(&self, tx: Transaction) -> Result<TxHash, ChainError> {
		if !self.can_send {
			return Err(ChainError::NoSigner(self.chain_id));
		}

		let request = TransactionRequest::default()
			.with_to(tx.to)
			.with_value(tx.value)
			.with_input(tx.data);
		let pending = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| unavailable("failed to send transaction", e))?;
		let hash = *pending.tx_hash();
		debug!(chain = %self.chain_id, tx = %hash, "submitted transaction");
		Ok(hash)
	}

	async fn transaction_receipt(
		&self,
		hash: TxHash,
	) -> Result<Option<TransactionReceipt>, ChainError> {
		let receipt = self
			.provider
			.get_transaction_receipt(hash)
			.await
			.map_err(|e| unavailable("failed to get receipt", e))?;

		Ok(receipt.map(|receipt| TransactionReceipt {
			transaction_hash: receipt.transaction_hash,
			block_number: receipt.block_number.unwrap_or(0),
			success: receipt.status(),
			logs: receipt.inner.logs().iter().map(convert_log).collect(),
		}))
	}
}

fn convert_log(log: &alloy::rpc::types::Log) -> Log {
	Log {
		address: log.inner.address,
		topics: log.inner.data.topics().to_vec(),
		data: log.inner.data.data.clone(),
		block_number: log.block_number.unwrap_or(0),
		transaction_hash: log.transaction_hash.unwrap_or_default(),
		log_index: log.log_index.unwrap_or(0),
	}
}
