//! Configuration loading for the SDK.
//!
//! TOML files keyed by chain ID, validated at load time so that a bad
//! endpoint or timing knob fails before any order is opened.

pub mod serde_helpers;
pub mod types;

pub use types::{FlowConfig, NetworkConfig, SdkConfig};

use sdk_chains::{ChainRegistry, HttpChain};
use std::{path::Path, sync::Arc};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),

	#[error(transparent)]
	Chain(#[from] sdk_chains::ChainError),
}

/// Configuration loader
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<String>,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self { file_path: None }
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub async fn load(&self) -> Result<SdkConfig, ConfigError> {
		let file_path = self.file_path.as_ref().ok_or_else(|| {
			ConfigError::FileNotFound("No configuration file specified".to_string())
		})?;

		let content = tokio::fs::read_to_string(file_path).await?;
		let config: SdkConfig =
			toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

		validate_config(&config)?;
		info!(networks = config.networks.len(), "configuration loaded");

		Ok(config)
	}
}

fn validate_config(config: &SdkConfig) -> Result<(), ConfigError> {
	if config.networks.is_empty() {
		return Err(ConfigError::ValidationError(
			"At least one network must be configured".to_string(),
		));
	}

	for (chain_id, network) in &config.networks {
		if chain_id.0 == 0 {
			return Err(ConfigError::ValidationError(
				"Chain ID 0 is not a valid network".to_string(),
			));
		}
		if !network.rpc_url.starts_with("http://") && !network.rpc_url.starts_with("https://") {
			return Err(ConfigError::ValidationError(format!(
				"Network {} RPC URL must be http(s): {}",
				chain_id, network.rpc_url
			)));
		}
	}

	let flow = &config.flow;
	if flow.total_timeout_secs == 0 {
		return Err(ConfigError::ValidationError(
			"flow.total_timeout_secs must be positive".to_string(),
		));
	}
	if !(flow.open_fraction > 0.0 && flow.open_fraction < 1.0) {
		return Err(ConfigError::ValidationError(format!(
			"flow.open_fraction must be in (0, 1), got {}",
			flow.open_fraction
		)));
	}
	if flow.poll_interval_secs == 0 || flow.poll_interval_secs > flow.max_poll_interval_secs {
		return Err(ConfigError::ValidationError(
			"flow.poll_interval_secs must be positive and at most max_poll_interval_secs"
				.to_string(),
		));
	}

	Ok(())
}

/// Build a read-only [`ChainRegistry`] covering every configured network.
pub fn build_registry(config: &SdkConfig) -> Result<ChainRegistry, ConfigError> {
	let mut registry = ChainRegistry::new();

	for (chain_id, network) in &config.networks {
		let adapter = HttpChain::connect(*chain_id, &network.rpc_url, network.confirmations)?;
		registry.register(Arc::new(adapter))?;
	}

	Ok(registry)
}
