//! Serde adapters for configuration maps.

/// Bridges `HashMap<ChainId, V>` fields to TOML tables, whose keys are
/// always strings. Apply with `#[serde(with = "chain_id_map")]`; a key that
/// does not parse as a chain id fails the whole document.
pub mod chain_id_map {
	use sdk_types::ChainId;
	use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
	use std::collections::HashMap;

	pub fn deserialize<'de, D, V>(deserializer: D) -> Result<HashMap<ChainId, V>, D::Error>
	where
		D: Deserializer<'de>,
		V: Deserialize<'de>,
	{
		let raw = HashMap::<String, V>::deserialize(deserializer)?;
		let mut map = HashMap::with_capacity(raw.len());
		for (key, value) in raw {
			let id: u64 = key
				.parse()
				.map_err(|_| de::Error::custom(format!("chain id key is not numeric: {key:?}")))?;
			map.insert(ChainId(id), value);
		}
		Ok(map)
	}

	pub fn serialize<S, V>(map: &HashMap<ChainId, V>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
		V: Serialize,
	{
		serializer.collect_map(map.iter().map(|(id, value)| (id.0.to_string(), value)))
	}
}
