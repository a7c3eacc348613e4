//! Bounded polling waits.
//!
//! A wait that runs out of time is not an error here: it returns a
//! [`WaitResult`] with `success == false` and hands control back to the
//! caller, which decides whether the test can continue.

use crate::config::SessionConfig;
use crate::result::PageResult;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Options for wait operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for WaitOptions {
    fn from(config: &SessionConfig) -> Self {
        Self {
            timeout_ms: config.reports_tab_timeout_ms,
            poll_interval_ms: config.poll_interval_ms,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Result of a wait operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitResult {
    /// Whether the condition became true before the timeout
    pub success: bool,
    /// Time spent waiting
    pub elapsed: Duration,
    /// Description of what was waited for
    pub waited_for: String,
}

impl WaitResult {
    /// Create a successful wait result
    #[must_use]
    pub fn success(elapsed: Duration, waited_for: impl Into<String>) -> Self {
        Self {
            success: true,
            elapsed,
            waited_for: waited_for.into(),
        }
    }

    /// Create a timeout wait result
    #[must_use]
    pub fn timeout(elapsed: Duration, waited_for: impl Into<String>) -> Self {
        Self {
            success: false,
            elapsed,
            waited_for: waited_for.into(),
        }
    }

    /// Whether the wait ran out of time
    #[must_use]
    pub const fn timed_out(&self) -> bool {
        !self.success
    }
}

/// Poll `condition` until it returns `true` or the timeout elapses.
///
/// The condition is checked at least once, even with a zero timeout.
/// Errors raised by the condition abort the wait and propagate.
pub fn wait_for<F>(
    mut condition: F,
    description: &str,
    options: &WaitOptions,
) -> PageResult<WaitResult>
where
    F: FnMut() -> PageResult<bool>,
{
    let start = Instant::now();
    let timeout = options.timeout();
    let poll_interval = options.poll_interval();

    loop {
        if condition()? {
            let elapsed = start.elapsed();
            debug!(waited_for = description, ?elapsed, "wait satisfied");
            return Ok(WaitResult::success(elapsed, description));
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            warn!(
                waited_for = description,
                timeout_ms = options.timeout_ms,
                "wait timed out"
            );
            return Ok(WaitResult::timeout(elapsed, description));
        }

        std::thread::sleep(poll_interval.min(timeout - elapsed));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::result::PageError;
    use std::cell::Cell;

    mod wait_options_tests {
        use super::*;

        #[test]
        fn test_default_follows_session_defaults() {
            let options = WaitOptions::default();
            assert_eq!(options.timeout_ms, 10_000);
            assert_eq!(options.poll_interval_ms, 50);
        }

        #[test]
        fn test_from_config() {
            let config = SessionConfig::new()
                .with_reports_tab_timeout(120)
                .with_poll_interval(10);
            let options = WaitOptions::from(&config);
            assert_eq!(options.timeout(), Duration::from_millis(120));
            assert_eq!(options.poll_interval(), Duration::from_millis(10));
        }

        #[test]
        fn test_chained() {
            let options = WaitOptions::new().with_timeout(5).with_poll_interval(1);
            assert_eq!(options.timeout_ms, 5);
            assert_eq!(options.poll_interval_ms, 1);
        }
    }

    mod wait_for_tests {
        use super::*;

        #[test]
        fn test_immediate_success() {
            let result = wait_for(|| Ok(true), "ready", &WaitOptions::new()).unwrap();
            assert!(result.success);
            assert_eq!(result.waited_for, "ready");
        }

        #[test]
        fn test_success_after_polls() {
            let calls = Cell::new(0);
            let options = WaitOptions::new().with_timeout(1_000).with_poll_interval(1);
            let result = wait_for(
                || {
                    calls.set(calls.get() + 1);
                    Ok(calls.get() >= 3)
                },
                "third poll",
                &options,
            )
            .unwrap();
            assert!(result.success);
            assert_eq!(calls.get(), 3);
        }

        #[test]
        fn test_timeout_returns_falsy_result() {
            let options = WaitOptions::new().with_timeout(30).with_poll_interval(5);
            let result = wait_for(|| Ok(false), "never", &options).unwrap();
            assert!(result.timed_out());
            assert!(result.elapsed >= Duration::from_millis(30));
            assert!(result.elapsed < Duration::from_secs(5));
        }

        #[test]
        fn test_zero_timeout_checks_once() {
            let calls = Cell::new(0);
            let options = WaitOptions::new().with_timeout(0);
            let result = wait_for(
                || {
                    calls.set(calls.get() + 1);
                    Ok(false)
                },
                "once",
                &options,
            )
            .unwrap();
            assert!(!result.success);
            assert_eq!(calls.get(), 1);
        }

        #[test]
        fn test_condition_error_propagates() {
            let result = wait_for(
                || Err(PageError::driver("session deleted")),
                "broken",
                &WaitOptions::new(),
            );
            assert!(matches!(result, Err(PageError::Driver { .. })));
        }
    }
}
