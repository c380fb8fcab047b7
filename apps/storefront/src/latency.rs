//! # Simulated Latency
//!
//! The storefront has no backend, but login, signup, payment and the
//! recommender pretend to make network calls. Each waits a fixed delay
//! taken from configuration. Tests use [`SimulatedLatency::none`].

use std::time::Duration;
use tracing::trace;

/// The fixed delays of the simulated backend calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub auth: Duration,
    pub checkout: Duration,
    pub recommendations: Duration,
}

/// Which simulated call is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyKind {
    Auth,
    Checkout,
    Recommendations,
}

impl SimulatedLatency {
    /// No delays at all.
    pub const fn none() -> Self {
        SimulatedLatency {
            auth: Duration::ZERO,
            checkout: Duration::ZERO,
            recommendations: Duration::ZERO,
        }
    }

    pub fn duration(&self, kind: LatencyKind) -> Duration {
        match kind {
            LatencyKind::Auth => self.auth,
            LatencyKind::Checkout => self.checkout,
            LatencyKind::Recommendations => self.recommendations,
        }
    }

    /// Waits the delay configured for `kind`.
    pub async fn wait(&self, kind: LatencyKind) {
        let delay = self.duration(kind);
        if delay.is_zero() {
            return;
        }
        trace!(?kind, ?delay, "Simulating backend latency");
        tokio::time::sleep(delay).await;
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        SimulatedLatency {
            auth: Duration::from_millis(1000),
            checkout: Duration::from_millis(2000),
            recommendations: Duration::from_millis(1500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_configured_delay() {
        let latency = SimulatedLatency::default();

        let start = Instant::now();
        latency.wait(LatencyKind::Checkout).await;
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_none_returns_immediately() {
        let start = Instant::now();
        SimulatedLatency::none().wait(LatencyKind::Auth).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
