//! Crashes per active daily user: report form and its data table.

use crate::driver::{Driver, Element};
use crate::locator::Locator;
use crate::page::{log_transition, Page, PageKind};
use crate::result::{PageError, PageResult};
use crate::select;
use crate::session::Session;

/// Locators used by the per active daily user page
pub mod locators {
    use crate::locator::Locator;

    /// Product select of the report form
    #[must_use]
    pub fn product_select() -> Locator {
        Locator::id("daily_search_version_form_products")
    }

    /// Start date input
    #[must_use]
    pub fn date_start() -> Locator {
        Locator::css(".daily_search_body .date[name=\"date_start\"]")
    }

    /// Generate button
    #[must_use]
    pub fn generate_button() -> Locator {
        Locator::id("daily_search_version_form_submit")
    }

    /// Data table
    #[must_use]
    pub fn table() -> Locator {
        Locator::id("crash_data")
    }

    /// Body rows of the data table, the trailing totals row included
    #[must_use]
    pub fn table_rows() -> Locator {
        Locator::css("#crash_data > tbody > tr")
    }

    /// Date cell of a table row
    #[must_use]
    pub fn date_cell() -> Locator {
        Locator::css("td:nth-child(1)")
    }
}

/// Crashes per active daily user report
#[derive(Debug)]
pub struct PerActiveDailyUserPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for PerActiveDailyUserPage<'s, D> {
    const KIND: PageKind = PageKind::PerActiveDailyUser;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> PerActiveDailyUserPage<'s, D> {
    /// Bind to the report page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    fn find(&self, locator: &Locator) -> PageResult<D::Element> {
        self.session.driver().find(locator)
    }

    /// Product currently selected in the form
    pub fn product_select(&self) -> PageResult<String> {
        select::first_selected_option_text(&self.find(&locators::product_select())?)
    }

    /// Replace the start date with `date`
    pub fn type_start_date(&self, date: &str) -> PageResult<()> {
        let input = self.find(&locators::date_start())?;
        input.clear()?;
        input.send_keys(date)
    }

    /// Regenerate the report
    pub fn click_generate_button(self) -> PageResult<PerActiveDailyUserPage<'s, D>> {
        self.find(&locators::generate_button())?.click()?;
        log_transition(Self::KIND, Self::KIND, "generate");
        Ok(PerActiveDailyUserPage::new(self.session))
    }

    /// Whether the browser raised a mixed content dialog
    pub fn is_mixed_content_warning_shown(&self) -> PageResult<bool> {
        self.base().is_alert_present()
    }

    /// Whether the data table is displayed
    pub fn is_table_visible(&self) -> PageResult<bool> {
        self.base().is_element_visible(None, &locators::table())
    }

    /// Number of body rows, the totals row included
    pub fn table_row_count(&self) -> PageResult<usize> {
        Ok(self
            .session
            .driver()
            .find_all(&locators::table_rows())?
            .len())
    }

    /// Date of the last data row; the final body row holds totals and is skipped
    pub fn last_row_date_value(&self) -> PageResult<String> {
        let rows = self.session.driver().find_all(&locators::table_rows())?;
        let Some(index) = rows.len().checked_sub(2) else {
            return Err(PageError::index_out_of_range("data row", 0, rows.len()));
        };
        rows[index].find(&locators::date_cell())?.text()
    }
}
