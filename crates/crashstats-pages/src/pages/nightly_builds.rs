//! Nightly builds listing.

use crate::driver::{Driver, Element};
use crate::page::{Page, PageKind};
use crate::result::PageResult;
use crate::session::Session;
use tracing::debug;

/// Locators used by the nightly builds page
pub mod locators {
    use crate::locator::Locator;

    /// Link to the FTP build archive
    #[must_use]
    pub fn link_to_ftp() -> Locator {
        Locator::css(".notitle > p > a")
    }
}

/// Nightly builds for one product
#[derive(Debug)]
pub struct NightlyBuildsPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for NightlyBuildsPage<'s, D> {
    const KIND: PageKind = PageKind::NightlyBuilds;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> NightlyBuildsPage<'s, D> {
    /// Bind to the page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    /// Target of the FTP link, `None` when the link has no `href`
    pub fn link_to_ftp(&self) -> PageResult<Option<String>> {
        self.session
            .driver()
            .find(&locators::link_to_ftp())?
            .attribute("href")
    }

    /// Leave the application for the FTP archive
    pub fn click_link_to_ftp(self) -> PageResult<()> {
        self.session
            .driver()
            .find(&locators::link_to_ftp())?
            .click()?;
        debug!(from = %Self::KIND, "left application for ftp listing");
        Ok(())
    }
}
