use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::health::HealthCheck;

/// Delay between two consecutive health probes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How long to keep probing before giving up.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Polling policy for [`wait_until_healthy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }
}

impl WaitPolicy {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("service not healthy after {attempts} attempts ({timeout:?})")]
pub struct WaitTimeout {
    pub timeout: Duration,
    pub attempts: u32,
}

/// Poll `target` until it reports healthy or `policy.timeout` has elapsed.
///
/// Unreachable and unhealthy answers are both treated as "not ready yet".
/// Returns the number of probes it took.
pub async fn wait_until_healthy<H: HealthCheck>(
    target: &H,
    policy: WaitPolicy,
) -> Result<u32, WaitTimeout> {
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;

        // A hung probe must not hold the loop far past the deadline.
        let budget = policy
            .timeout
            .saturating_sub(start.elapsed())
            .max(policy.interval);
        match tokio::time::timeout(budget, target.is_healthy()).await {
            Ok(Ok(true)) => {
                info!(attempts, "service is healthy");
                return Ok(attempts);
            }
            Ok(Ok(false)) => debug!(attempts, "service answered but is not healthy yet"),
            Ok(Err(e)) => debug!(attempts, error = %e, "service unreachable"),
            Err(_) => debug!(attempts, ?budget, "health probe timed out"),
        }

        if start.elapsed() >= policy.timeout {
            return Err(WaitTimeout {
                timeout: policy.timeout,
                attempts,
            });
        }
        tokio::time::sleep(policy.interval).await;
    }
}
