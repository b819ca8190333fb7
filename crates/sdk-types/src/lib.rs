//! Shared types for the intent settlement SDK.
//!
//! Value objects for the ERC-7683 order lifecycle (intents, encoded and
//! resolved orders, fill records), the order-status state machine with its
//! monotonic merge rule, and the poll/cancellation primitives every blocking
//! wait in the SDK accepts.

pub mod common;
pub mod order;
pub mod poll;
pub mod status;

pub use common::*;
pub use order::*;
pub use poll::*;
pub use status::*;
