//! Registry for chain adapters.
//!
//! One registry serves every concurrent order flow; adapters are stored as
//! `Arc<dyn ChainAdapter>` and handed out by clone, so the registry itself
//! is read-only after construction.

use crate::{adapter::ChainAdapter, ChainError};
use sdk_types::ChainId;
use std::{collections::HashMap, fmt, sync::Arc};
use tracing::info;

pub struct ChainRegistry {
	adapters: HashMap<ChainId, Arc<dyn ChainAdapter>>,
}

impl ChainRegistry {
	pub fn new() -> Self {
		Self {
			adapters: HashMap::new(),
		}
	}

	/// Register an adapter. Fails if its chain is already present.
	pub fn register(&mut self, adapter: Arc<dyn ChainAdapter>) -> Result<(), ChainError> {
		let chain_id = adapter.chain_id();
		info!("registering chain adapter for chain {}", chain_id);

		if self.adapters.contains_key(&chain_id) {
			return Err(ChainError::AlreadyRegistered(chain_id));
		}

		self.adapters.insert(chain_id, adapter);
		Ok(())
	}

	pub fn get(&self, chain_id: ChainId) -> Option<Arc<dyn ChainAdapter>> {
		self.adapters.get(&chain_id).cloned()
	}

	/// Like [`get`](Self::get) but a missing chain is an error.
	pub fn get_required(&self, chain_id: ChainId) -> Result<Arc<dyn ChainAdapter>, ChainError> {
		self.get(chain_id)
			.ok_or(ChainError::NotConfigured(chain_id))
	}

	/// All registered chain IDs, in no particular order.
	pub fn chains(&self) -> Vec<ChainId> {
		self.adapters.keys().copied().collect()
	}
}

impl Default for ChainRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ChainRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ChainRegistry")
			.field("chains", &self.adapters.keys().collect::<Vec<_>>())
			.finish()
	}
}
