//! Crash report listing with its reports tab.

use crate::base::PageBase;
use crate::driver::{Driver, Element};
use crate::page::{Page, PageKind};
use crate::region::Region;
use crate::result::PageResult;
use crate::session::Session;
use crate::wait::{wait_for, WaitOptions, WaitResult};

/// Locators used by the crash report page
pub mod locators {
    use crate::locator::Locator;

    /// Content panel of the reports tab
    #[must_use]
    pub fn reports_tab() -> Locator {
        Locator::id("reports")
    }

    /// Rows of the reports table
    #[must_use]
    pub fn report_rows() -> Locator {
        Locator::css("#reportsList tbody tr")
    }

    /// Navigation button of the reports tab
    #[must_use]
    pub fn reports_tab_button() -> Locator {
        Locator::css("#report-list-nav li:nth-of-type(4) > a")
    }

    /// Product cell of a report row
    #[must_use]
    pub fn product_cell() -> Locator {
        Locator::css("td:nth-of-type(3)")
    }

    /// Version cell of a report row
    #[must_use]
    pub fn version_cell() -> Locator {
        Locator::css("td:nth-of-type(4)")
    }
}

/// Wait until the reports tab content is displayed, bounded by the session's
/// reports-tab timeout. A timeout is reported in the result, not as an error.
pub(crate) fn wait_for_reports_tab<D: Driver>(session: &Session<D>) -> PageResult<WaitResult> {
    let base = PageBase::new(session);
    let reports_tab = locators::reports_tab();
    wait_for(
        || base.is_element_visible(None, &reports_tab),
        "reports tab visible",
        &WaitOptions::from(session.config()),
    )
}

/// The crash report listing for one signature
#[derive(Debug)]
pub struct CrashReportPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for CrashReportPage<'s, D> {
    const KIND: PageKind = PageKind::CrashReport;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> CrashReportPage<'s, D> {
    /// Bind to the crash report page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    /// Report rows, queried now
    pub fn reports(&self) -> PageResult<Vec<ReportRow<'s, D>>> {
        Ok(Region::collect(self.session, &locators::report_rows())?
            .into_iter()
            .map(|region| ReportRow { region })
            .collect())
    }

    /// Switch to the reports tab and wait for its content.
    ///
    /// Check `success` on the result before reading [`reports`](Self::reports).
    pub fn click_reports(&self) -> PageResult<WaitResult> {
        self.session
            .driver()
            .find(&locators::reports_tab_button())?
            .click()?;
        wait_for_reports_tab(self.session)
    }
}

/// One row of the reports table
#[derive(Debug)]
pub struct ReportRow<'s, D: Driver> {
    region: Region<'s, D>,
}

impl<D: Driver> ReportRow<'_, D> {
    /// Product column
    pub fn product(&self) -> PageResult<String> {
        self.region.text_of(&locators::product_cell())
    }

    /// Version column
    pub fn version(&self) -> PageResult<String> {
        self.region.text_of(&locators::version_cell())
    }
}
