//! The shared browser session.

use crate::config::SessionConfig;
use crate::driver::Driver;
use crate::result::PageResult;
use tracing::debug;

/// One live browser session plus its configuration.
///
/// Every page and region created during a test borrows the same session.
/// The harness creates it before the first page and drops it at teardown.
#[derive(Debug)]
pub struct Session<D: Driver> {
    driver: D,
    config: SessionConfig,
}

impl<D: Driver> Session<D> {
    /// Wrap a driver with default configuration
    #[must_use]
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, SessionConfig::default())
    }

    /// Wrap a driver with explicit configuration
    #[must_use]
    pub fn with_config(driver: D, config: SessionConfig) -> Self {
        Self { driver, config }
    }

    /// The underlying driver
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// The session configuration
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Application base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Navigate to a path relative to the base URL
    pub fn navigate_to(&self, path: &str) -> PageResult<()> {
        let url = self.config.url_for(path);
        debug!(%url, "navigate");
        self.driver.navigate(&url)
    }

    /// Consume the session and return the driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}
