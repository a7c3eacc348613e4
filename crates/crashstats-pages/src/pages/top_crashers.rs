//! Top crashers page and its signature rows.

use super::crash_report::CrashReportPage;
use crate::driver::{Driver, Element};
use crate::locator::Locator;
use crate::page::{log_transition, Page, PageKind};
use crate::region::{nth, Region};
use crate::result::PageResult;
use crate::session::Session;

/// Row text of a signature row with no signature
pub const EMPTY_SIGNATURE: &str = "empty signature";

/// Locators used by the top crashers page
pub mod locators {
    use crate::locator::Locator;

    /// Product name in the page heading
    #[must_use]
    pub fn heading_product() -> Locator {
        Locator::id("current-product")
    }

    /// Version in the page heading
    #[must_use]
    pub fn heading_version() -> Locator {
        Locator::id("current-version")
    }

    /// Filter-type links ("Browser", "Plugin", ...)
    #[must_use]
    pub fn filter_by_links() -> Locator {
        Locator::css(".tc-duration-type.tc-filter > li > a")
    }

    /// Day-range links ("3", "7", "14", "28")
    #[must_use]
    pub fn filter_days_links() -> Locator {
        Locator::css(".tc-duration-days.tc-filter > li > a")
    }

    /// The selected day-range link
    #[must_use]
    pub fn current_days_filter() -> Locator {
        Locator::css("ul.tc-duration-days li a.selected")
    }

    /// The selected filter-type link
    #[must_use]
    pub fn current_filter_type() -> Locator {
        Locator::css("ul.tc-duration-type li a.selected")
    }

    /// Rows of the signature table
    #[must_use]
    pub fn signature_rows() -> Locator {
        Locator::css("#signatureList tbody tr")
    }

    /// Signature link inside a row
    #[must_use]
    pub fn signature_link() -> Locator {
        Locator::css("a.signature")
    }

    /// Browser icon inside a row
    #[must_use]
    pub fn browser_icon() -> Locator {
        Locator::css("div img.browser")
    }

    /// Plugin icon inside a row
    #[must_use]
    pub fn plugin_icon() -> Locator {
        Locator::css("div img.plugin")
    }
}

/// Top crashers for one product and version
#[derive(Debug)]
pub struct TopCrashersPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for TopCrashersPage<'s, D> {
    const KIND: PageKind = PageKind::TopCrashers;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> TopCrashersPage<'s, D> {
    /// Bind to the top crashers page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    fn text_of(&self, locator: &Locator) -> PageResult<String> {
        self.session.driver().find(locator)?.text()
    }

    /// Product shown in the heading
    pub fn page_heading_product(&self) -> PageResult<String> {
        self.text_of(&locators::heading_product())
    }

    /// Version shown in the heading
    pub fn page_heading_version(&self) -> PageResult<String> {
        self.text_of(&locators::heading_version())
    }

    /// Number of signature rows
    pub fn results_count(&self) -> PageResult<usize> {
        Ok(self
            .session
            .driver()
            .find_all(&locators::signature_rows())?
            .len())
    }

    /// Whether the table has at least one row
    pub fn results_found(&self) -> PageResult<bool> {
        Ok(self.results_count()? > 0)
    }

    /// Click the filter-type link labelled exactly `option`.
    ///
    /// Returns the re-rendered page, or `None` when no link matches and
    /// nothing was clicked. After a match `self` still compiles but models
    /// the previous rendering; use the returned page and drop this one.
    pub fn click_filter_by(&self, option: &str) -> PageResult<Option<TopCrashersPage<'s, D>>> {
        self.click_matching(&locators::filter_by_links(), option, "filter by")
    }

    /// Click the day-range link labelled exactly `days`.
    ///
    /// Returns the re-rendered page, or `None` when no link matches and
    /// nothing was clicked. After a match `self` still compiles but models
    /// the previous rendering; use the returned page and drop this one.
    pub fn click_filter_days_by(&self, days: &str) -> PageResult<Option<TopCrashersPage<'s, D>>> {
        self.click_matching(&locators::filter_days_links(), days, "filter days by")
    }

    fn click_matching(
        &self,
        links: &Locator,
        label: &str,
        action: &str,
    ) -> PageResult<Option<TopCrashersPage<'s, D>>> {
        for link in self.session.driver().find_all(links)? {
            if link.text()? == label {
                link.click()?;
                log_transition(Self::KIND, Self::KIND, action);
                return Ok(Some(TopCrashersPage::new(self.session)));
            }
        }
        Ok(None)
    }

    /// Label of the selected day-range link
    pub fn current_days_filter(&self) -> PageResult<String> {
        self.text_of(&locators::current_days_filter())
    }

    /// Label of the selected filter-type link
    pub fn current_filter_type(&self) -> PageResult<String> {
        self.text_of(&locators::current_filter_type())
    }

    /// Every signature row, placeholders included
    pub fn signature_items(&self) -> PageResult<Vec<SignatureItem<'s, D>>> {
        Ok(Region::collect(self.session, &locators::signature_rows())?
            .into_iter()
            .map(|region| SignatureItem { region })
            .collect())
    }

    /// Signature rows that are not the empty-signature placeholder
    pub fn valid_signature_items(&self) -> PageResult<Vec<SignatureItem<'s, D>>> {
        let mut valid = Vec::new();
        for item in self.signature_items()? {
            if !item.is_placeholder()? {
                valid.push(item);
            }
        }
        Ok(valid)
    }

    /// Open the crash reports of the first non-placeholder signature
    pub fn click_first_valid_signature(self) -> PageResult<CrashReportPage<'s, D>> {
        nth(self.valid_signature_items()?, 0, "valid signature")?.click()
    }

    /// Signature text of the first non-placeholder row
    pub fn first_valid_signature_text(&self) -> PageResult<String> {
        nth(self.valid_signature_items()?, 0, "valid signature")?.text()
    }
}

/// One row of the top crashers signature table
#[derive(Debug)]
pub struct SignatureItem<'s, D: Driver> {
    region: Region<'s, D>,
}

impl<'s, D: Driver> SignatureItem<'s, D> {
    /// Whether the whole row reads exactly [`EMPTY_SIGNATURE`]
    pub fn is_placeholder(&self) -> PageResult<bool> {
        Ok(self.region.text()? == EMPTY_SIGNATURE)
    }

    /// Signature link text
    pub fn text(&self) -> PageResult<String> {
        self.region.text_of(&locators::signature_link())
    }

    /// Open the crash reports for this signature
    pub fn click(self) -> PageResult<CrashReportPage<'s, D>> {
        self.region.click(&locators::signature_link())?;
        log_transition(PageKind::TopCrashers, PageKind::CrashReport, "signature");
        Ok(CrashReportPage::new(self.region.session()))
    }

    /// Whether the row shows the plugin icon
    pub fn is_plugin_icon_visible(&self) -> PageResult<bool> {
        self.region.is_visible(&locators::plugin_icon())
    }

    /// Whether the row shows the browser icon
    pub fn is_browser_icon_visible(&self) -> PageResult<bool> {
        self.region.is_visible(&locators::browser_icon())
    }
}
