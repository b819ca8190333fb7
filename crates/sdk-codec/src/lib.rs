//! Canonical wire codec for the intent settlement contracts.
//!
//! Everything that crosses the chain boundary goes through this crate: the
//! on-chain order tuple, the resolved order and state returned by the origin
//! inbox, the fill origin-data payload the destination settler executes, and
//! the calldata/event shapes of all three contract surfaces. Encoding is pure
//! and deterministic; order ids and fill hashes are derived from encoded
//! content, so identical input must always produce identical bytes.

pub mod contracts;
pub mod error;
pub mod executor;
pub mod fill;
pub mod inbox;
pub mod order;
pub mod outbox;

mod num;

pub use error::CodecError;
pub use fill::{decode_fill_origin_data, encode_fill_origin_data, fill_hash};
pub use order::{
	decode_order_data, encode_order, order_data_typehash, OrderData, StandardOrderData, MAX_CALLS,
	MAX_EXPENSES,
};
