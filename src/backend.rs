//! Pluggable submission backends.
//!
//! The controller never talks to a real server; it hands the finished
//! [`RegistrationPayload`] to a [`SubmissionBackend`]. The default
//! [`SimulatedBackend`] stands in for the eventual HTTP endpoint and always
//! succeeds after a fixed delay. Tests inject their own backend to get
//! deterministic completion or failures.

use std::time::Duration;

use async_trait::async_trait;

use crate::form::RegistrationPayload;

/// Failure reported by a submission backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("registration rejected: {0}")]
pub struct BackendError(pub String);

/// Receives the finished registration document.
///
/// Implementations model the `success|failure` boundary of the real backend
/// API. The controller awaits exactly one call per submission attempt.
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
	async fn submit(&self, payload: &RegistrationPayload) -> Result<(), BackendError>;
}

/// Backend stub that always succeeds after a fixed delay.
///
/// The delay stands in for network latency; no I/O happens.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use enrollment_forms::SimulatedBackend;
///
/// let backend = SimulatedBackend::new();
/// let instant = SimulatedBackend::with_delay(Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
	delay: Duration,
}

impl SimulatedBackend {
	/// The latency the original form simulated.
	pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

	/// Creates a backend with the default two-second delay.
	pub fn new() -> Self {
		Self {
			delay: Self::DEFAULT_DELAY,
		}
	}

	/// Creates a backend with a specific delay. `Duration::ZERO` completes
	/// immediately, which keeps tests fast.
	pub fn with_delay(delay: Duration) -> Self {
		Self { delay }
	}
}

impl Default for SimulatedBackend {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
	async fn submit(&self, payload: &RegistrationPayload) -> Result<(), BackendError> {
		tokio::time::sleep(self.delay).await;
		tracing::debug!(
			email = %payload.email,
			delay_ms = self.delay.as_millis() as u64,
			"simulated backend accepted registration"
		);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::{RegistrationForm, RegistrationPayload};

	#[tokio::test]
	async fn test_simulated_backend_always_succeeds() {
		// Arrange
		let backend = SimulatedBackend::with_delay(Duration::ZERO);
		let payload = RegistrationPayload::from(&RegistrationForm::default());

		// Act
		let result = backend.submit(&payload).await;

		// Assert
		assert!(result.is_ok());
	}

	#[tokio::test(start_paused = true)]
	async fn test_simulated_backend_waits_for_delay() {
		// Arrange
		let backend = SimulatedBackend::with_delay(Duration::from_secs(2));
		let payload = RegistrationPayload::from(&RegistrationForm::default());
		let started = tokio::time::Instant::now();

		// Act: paused runtime auto-advances the clock across the sleep
		backend.submit(&payload).await.unwrap();

		// Assert
		assert!(started.elapsed() >= Duration::from_secs(2));
	}

	#[test]
	fn test_default_delay_matches_original() {
		// Assert
		assert_eq!(SimulatedBackend::new().delay, Duration::from_secs(2));
	}
}
