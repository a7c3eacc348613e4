//! Top crashers by site.

use crate::driver::{Driver, Element};
use crate::page::{Page, PageKind};
use crate::result::PageResult;
use crate::session::Session;

/// Locators used by the top crashers by site page
pub mod locators {
    use crate::locator::Locator;

    /// Product header
    #[must_use]
    pub fn product_header() -> Locator {
        Locator::id("tcburl-product")
    }

    /// Version header
    #[must_use]
    pub fn product_version_header() -> Locator {
        Locator::id("tcburl-version")
    }
}

/// Top crashing sites for one product and version
#[derive(Debug)]
pub struct TopCrashersBySitePage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for TopCrashersBySitePage<'s, D> {
    const KIND: PageKind = PageKind::TopCrashersBySite;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> TopCrashersBySitePage<'s, D> {
    /// Bind to the page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    /// Product header text
    pub fn product_header(&self) -> PageResult<String> {
        self.session
            .driver()
            .find(&locators::product_header())?
            .text()
    }

    /// Version header text
    pub fn product_version_header(&self) -> PageResult<String> {
        self.session
            .driver()
            .find(&locators::product_version_header())?
            .text()
    }
}
