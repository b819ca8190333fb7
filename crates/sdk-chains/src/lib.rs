//! Chain access for the SDK.
//!
//! Defines the read-mostly [`ChainAdapter`] seam every other crate talks
//! through, a [`ChainRegistry`] for multi-chain lookups, and an alloy-backed
//! HTTP implementation. Adapters are shared as `Arc<dyn ChainAdapter>` and
//! are safe for concurrent reads; transport-level retry/backoff is the
//! transport's concern and is not implemented here — failures propagate as
//! [`ChainError::Unavailable`].

pub mod adapter;
pub mod http;
pub mod registry;

pub use adapter::{ChainAdapter, Log, LogFilter, Transaction, TransactionReceipt};
pub use http::HttpChain;
pub use registry::ChainRegistry;

use sdk_types::ChainId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
	/// Transport-level failure. Propagated to the caller, never swallowed;
	/// whether to retry is the caller's decision.
	#[error("chain unavailable: {0}")]
	Unavailable(String),

	#[error("chain {0} not configured")]
	NotConfigured(ChainId),

	#[error("chain {0} already registered")]
	AlreadyRegistered(ChainId),

	#[error("adapter for chain {0} has no signer; cannot submit transactions")]
	NoSigner(ChainId),

	#[error("invalid chain configuration: {0}")]
	InvalidConfig(String),
}
