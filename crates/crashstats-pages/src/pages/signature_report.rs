//! Signature report page (`/report/list`).

use super::crash_report::{wait_for_reports_tab, CrashReportPage};
use crate::driver::{Driver, Element};
use crate::page::{log_transition, Page, PageKind};
use crate::result::{PageError, PageResult};
use crate::session::Session;
use crate::wait::WaitResult;

/// Locators used by the signature report page
pub mod locators {
    use crate::locator::Locator;

    /// Total number of crash reports for the signature
    #[must_use]
    pub fn total_items() -> Locator {
        Locator::css("span.totalItems")
    }

    /// The reports tab handle
    #[must_use]
    pub fn reports_tab_link() -> Locator {
        Locator::css(".ui-state-default.ui-corner-top:nth-of-type(4) > a > span")
    }
}

/// Report summary for one crash signature
#[derive(Debug)]
pub struct SignatureReportPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for SignatureReportPage<'s, D> {
    const KIND: PageKind = PageKind::SignatureReport;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> SignatureReportPage<'s, D> {
    /// Bind to the signature report already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    /// Open the reports tab and wait, bounded, for its content.
    ///
    /// The page is returned even when the wait times out; reads from it are
    /// only reliable when the returned [`WaitResult`] reports success.
    pub fn click_reports(self) -> PageResult<(CrashReportPage<'s, D>, WaitResult)> {
        self.session
            .driver()
            .find(&locators::reports_tab_link())?
            .click()?;
        let waited = wait_for_reports_tab(self.session)?;
        log_transition(Self::KIND, PageKind::CrashReport, "reports tab");
        Ok((CrashReportPage::new(self.session), waited))
    }

    /// Total items label with thousands separators removed
    pub fn total_items_label(&self) -> PageResult<String> {
        Ok(self
            .session
            .driver()
            .find(&locators::total_items())?
            .text()?
            .replace(',', ""))
    }

    /// Total items as a number
    pub fn total_items(&self) -> PageResult<u64> {
        let label = self.total_items_label()?;
        label.trim().parse().map_err(|_| PageError::Parse {
            message: format!("total items label {label:?} is not a number"),
        })
    }
}
