use std::time::Duration;

/// Artificial delays applied before each store operation resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySettings {
    /// Whole-collection reads and random stacks.
    pub list: Duration,
    /// Single-record reads, including the current user.
    pub lookup: Duration,
    /// Create and update.
    pub write: Duration,
    pub delete: Duration,
    /// Filtered reads such as books by genre or a user's matches.
    pub query: Duration,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            lookup: Duration::from_millis(200),
            write: Duration::from_millis(250),
            delete: Duration::from_millis(200),
            query: Duration::from_millis(250),
        }
    }
}

impl LatencySettings {
    /// No simulated latency at all.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            lookup: Duration::ZERO,
            write: Duration::ZERO,
            delete: Duration::ZERO,
            query: Duration::ZERO,
        }
    }
}

pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
