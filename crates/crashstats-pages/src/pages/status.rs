//! Server status page.

use crate::driver::Driver;
use crate::page::{Page, PageKind};
use crate::result::PageResult;
use crate::session::Session;

/// Number of graphs a healthy status page renders
pub const EXPECTED_GRAPHS: usize = 4;

/// Locators used by the status page
pub mod locators {
    use crate::locator::Locator;

    /// "At a glance" table
    #[must_use]
    pub fn at_a_glance() -> Locator {
        Locator::css("div.panel > div > table.server_status")
    }

    /// Status graphs
    #[must_use]
    pub fn graphs() -> Locator {
        Locator::css("div.panel > div > div.server-status-graph")
    }

    /// Latest raw stats table
    #[must_use]
    pub fn latest_raw_stats() -> Locator {
        Locator::css("div.panel > div > table#server-stats-table")
    }
}

/// Processing server status
#[derive(Debug)]
pub struct StatusPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for StatusPage<'s, D> {
    const KIND: PageKind = PageKind::Status;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> StatusPage<'s, D> {
    /// Bind to the status page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    /// Whether the "at a glance" table is present
    pub fn is_at_a_glance_present(&self) -> PageResult<bool> {
        self.base().is_element_present(&locators::at_a_glance())
    }

    /// Whether exactly [`EXPECTED_GRAPHS`] graphs are rendered
    pub fn are_graphs_present(&self) -> PageResult<bool> {
        Ok(self.session.driver().find_all(&locators::graphs())?.len() == EXPECTED_GRAPHS)
    }

    /// Whether the latest raw stats table is present
    pub fn is_latest_raw_stats_present(&self) -> PageResult<bool> {
        self.base().is_element_present(&locators::latest_raw_stats())
    }
}
