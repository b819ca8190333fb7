//! Poll policy and cancellation for the SDK's blocking waits.
//!
//! Every wait in the SDK is a cooperative poll: sleep, observe, merge,
//! repeat, with the sleep growing by bounded doubling up to a cap. No lock
//! is held while suspended. A [`CancelToken`] lets the caller abort a wait
//! from another task; the wait then fails with its crate's `Cancelled`
//! error and performs no partial state mutation.

use std::time::Duration;
use tokio::sync::broadcast;

/// Caller-supplied pacing and budget for one blocking wait.
#[derive(Debug, Clone)]
pub struct PollPolicy {
	/// Initial interval between observations.
	pub interval: Duration,
	/// Cap for the backoff growth.
	pub max_interval: Duration,
	/// Overall deadline for the wait; elapsing it is a `Timeout`.
	pub timeout: Duration,
}

impl Default for PollPolicy {
	fn default() -> Self {
		Self {
			interval: Duration::from_secs(2),
			max_interval: Duration::from_secs(30),
			timeout: Duration::from_secs(600),
		}
	}
}

impl PollPolicy {
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Next sleep duration after `current`: bounded doubling.
	pub fn next_interval(&self, current: Duration) -> Duration {
		(current * 2).min(self.max_interval)
	}
}

/// Cancellation signal shared between a flow and its caller.
///
/// Cheap to clone; all clones observe the same cancellation.
#[derive(Debug, Clone)]
pub struct CancelToken {
	sender: broadcast::Sender<()>,
}

impl CancelToken {
	pub fn new() -> Self {
		let (sender, _) = broadcast::channel(1);
		Self { sender }
	}

	/// Signal every wait subscribed to this token.
	pub fn cancel(&self) {
		// Send fails only when nothing is waiting, which is fine.
		let _ = self.sender.send(());
	}

	pub fn subscribe(&self) -> broadcast::Receiver<()> {
		self.sender.subscribe()
	}
}

impl Default for CancelToken {
	fn default() -> Self {
		Self::new()
	}
}
