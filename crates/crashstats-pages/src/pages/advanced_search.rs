//! Advanced search (`/query/query`): the search form and its results table.
//!
//! Result rows resolve their cell positions through a [`ColumnLayout`] read
//! from the header once per [`AdvancedSearchPage::results`] call.

use super::signature_report::SignatureReportPage;
use crate::columns::{ColumnLayout, ResultField, PLUGIN_HEADER_INDEX};
use crate::driver::{Driver, Element};
use crate::locator::Locator;
use crate::page::{log_transition, Page, PageKind};
use crate::region::{nth, Region};
use crate::result::PageResult;
use crate::select;
use crate::session::Session;
use std::fmt;

/// Script returning the browser build id
pub const BUILD_ID_SCRIPT: &str = "return navigator.buildID;";

/// Locators used by the advanced search page
pub mod locators {
    use crate::locator::Locator;

    /// Product multi-select
    #[must_use]
    pub fn product_select() -> Locator {
        Locator::id("product")
    }

    /// Version multi-select
    #[must_use]
    pub fn version_select() -> Locator {
        Locator::id("version")
    }

    /// Operating system multi-select
    #[must_use]
    pub fn os_select() -> Locator {
        Locator::id("platform")
    }

    /// Form submit button
    #[must_use]
    pub fn filter_button() -> Locator {
        Locator::id("query_submit")
    }

    /// Paragraphs describing the query results
    #[must_use]
    pub fn query_results_text() -> Locator {
        Locator::css(".body.notitle p")
    }

    /// Build id input
    #[must_use]
    pub fn build_id_input() -> Locator {
        Locator::id("build_id")
    }

    /// Radio inputs of the form
    #[must_use]
    pub fn radio_items() -> Locator {
        Locator::css(".radio-item > label > input")
    }

    /// Rows of the results table
    #[must_use]
    pub fn result_rows() -> Locator {
        Locator::css("#signatureList > tbody > tr")
    }

    /// Header cells of the results table
    #[must_use]
    pub fn result_headers() -> Locator {
        Locator::css("#signatureList > thead > tr > th")
    }

    /// Cells of a result row
    #[must_use]
    pub fn row_cells() -> Locator {
        Locator::tag_name("td")
    }

    /// Link inside a cell
    #[must_use]
    pub fn cell_link() -> Locator {
        Locator::tag_name("a")
    }

    /// Browser icon inside the signature cell
    #[must_use]
    pub fn browser_icon() -> Locator {
        Locator::css("div.signature-icons > img.browser")
    }

    /// Plugin icon inside the signature cell
    #[must_use]
    pub fn plugin_icon() -> Locator {
        Locator::css("div.signature-icons > img.plugin")
    }

    /// "More" link of the bug id cell
    #[must_use]
    pub fn bug_more_link() -> Locator {
        Locator::css("a.bug_ids_more")
    }
}

/// Sort indicator of a results header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortState {
    /// Sorted ascending (`headerSortDown`)
    Ascending,
    /// Sorted descending (`headerSortUp`)
    Descending,
    /// No recognized sort marker
    Unsorted,
}

impl SortState {
    /// Classify a header from its `class` attribute
    #[must_use]
    pub fn from_class(class: Option<&str>) -> Self {
        match class {
            Some(class) if class.contains("headerSortDown") => Self::Ascending,
            Some(class) if class.contains("headerSortUp") => Self::Descending,
            _ => Self::Unsorted,
        }
    }

    /// Name as shown in test reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Unsorted => "unsorted",
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advanced search form and results
#[derive(Debug)]
pub struct AdvancedSearchPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for AdvancedSearchPage<'s, D> {
    const KIND: PageKind = PageKind::AdvancedSearch;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> AdvancedSearchPage<'s, D> {
    /// Bind to the advanced search page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    fn find(&self, locator: &Locator) -> PageResult<D::Element> {
        self.session.driver().find(locator)
    }

    /// Select a product by its visible name
    pub fn select_product(&self, product: &str) -> PageResult<()> {
        select::select_by_visible_text(&self.find(&locators::product_select())?, product)
    }

    /// Select a version by its visible label
    pub fn select_version(&self, version: &str) -> PageResult<()> {
        select::select_by_visible_text(&self.find(&locators::version_select())?, version)
    }

    /// Select an operating system by its visible name
    pub fn select_os(&self, os: &str) -> PageResult<()> {
        select::select_by_visible_text(&self.find(&locators::os_select())?, os)
    }

    /// Submit the form; the page re-renders with results
    pub fn filter_reports(self) -> PageResult<AdvancedSearchPage<'s, D>> {
        self.find(&locators::filter_button())?.click()?;
        log_transition(Self::KIND, Self::KIND, "filter reports");
        Ok(AdvancedSearchPage::new(self.session))
    }

    /// Open the signature report of the first result
    pub fn click_first_signature(self) -> PageResult<SignatureReportPage<'s, D>> {
        nth(self.results()?, 0, "result row")?.click_signature()
    }

    /// Type into the build id field
    pub fn type_build_id(&self, value: &str) -> PageResult<()> {
        self.find(&locators::build_id_input())?.send_keys(value)
    }

    /// Build id reported by the browser itself
    pub fn build_id(&self) -> PageResult<String> {
        Ok(match self.session.driver().execute_script(BUILD_ID_SCRIPT)? {
            serde_json::Value::String(id) => id,
            other => other.to_string(),
        })
    }

    /// First selected product
    pub fn currently_selected_product(&self) -> PageResult<String> {
        select::first_selected_option_text(&self.find(&locators::product_select())?)
    }

    /// Click the `index`-th radio input of the form
    pub fn select_radio_button(&self, index: usize) -> PageResult<()> {
        let radios = self.session.driver().find_all(&locators::radio_items())?;
        nth(radios, index, "radio button")?.click()
    }

    /// Every product offered by the product select
    pub fn product_list(&self) -> PageResult<Vec<String>> {
        select::option_texts(&self.find(&locators::product_select())?)
    }

    /// Text of the `index`-th results description paragraph
    pub fn query_results_text(&self, index: usize) -> PageResult<String> {
        let paragraphs = self
            .session
            .driver()
            .find_all(&locators::query_results_text())?;
        nth(paragraphs, index, "query results paragraph")?.text()
    }

    /// Whether the results table has at least one row
    pub fn results_found(&self) -> PageResult<bool> {
        self.base().is_element_present(&locators::result_rows())
    }

    /// Result rows, queried now, sharing one resolved column layout
    pub fn results(&self) -> PageResult<Vec<ResultRow<'s, D>>> {
        let rows = self.session.driver().find_all(&locators::result_rows())?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let layout = ColumnLayout::from_header_text(
            &self.results_table_header(PLUGIN_HEADER_INDEX)?.text()?,
        );
        Ok(rows
            .into_iter()
            .map(|row| ResultRow {
                region: Region::new(self.session, row),
                layout,
            })
            .collect())
    }

    /// Header cell `column` of the results table
    pub fn results_table_header(&self, column: usize) -> PageResult<ResultHeader<'s, D>> {
        let headers = self
            .session
            .driver()
            .find_all(&locators::result_headers())?;
        Ok(ResultHeader {
            session: self.session,
            root: nth(headers, column, "results header")?,
        })
    }
}

/// One row of the search results table
#[derive(Debug)]
pub struct ResultRow<'s, D: Driver> {
    region: Region<'s, D>,
    layout: ColumnLayout,
}

impl<'s, D: Driver> ResultRow<'s, D> {
    /// Layout this row resolves its cells with
    #[must_use]
    pub const fn layout(&self) -> ColumnLayout {
        self.layout
    }

    /// Whether the table carries the "Plugin Filename" column
    #[must_use]
    pub const fn is_plugin_filename_present(&self) -> bool {
        self.layout.plugin_filename_present()
    }

    fn cell(&self, field: ResultField) -> PageResult<D::Element> {
        let cells = self.region.find_all(&locators::row_cells())?;
        nth(cells, self.layout.column(field), field.label())
    }

    fn cell_text(&self, field: ResultField) -> PageResult<String> {
        self.cell(field)?.text()
    }

    /// Rank
    pub fn rank(&self) -> PageResult<String> {
        self.cell_text(ResultField::Rank)
    }

    /// Signature
    pub fn signature(&self) -> PageResult<String> {
        self.cell_text(ResultField::Signature)
    }

    /// Open the signature report for this row
    pub fn click_signature(self) -> PageResult<SignatureReportPage<'s, D>> {
        self.cell(ResultField::Signature)?
            .find(&locators::cell_link())?
            .click()?;
        log_transition(PageKind::AdvancedSearch, PageKind::SignatureReport, "signature");
        Ok(SignatureReportPage::new(self.region.session()))
    }

    /// Whether the signature cell shows the plugin icon
    pub fn is_plugin_icon_visible(&self) -> PageResult<bool> {
        let cell = self.cell(ResultField::Signature)?;
        self.region
            .base()
            .is_element_visible(Some(&cell), &locators::plugin_icon())
    }

    /// Whether the signature cell shows the browser icon
    pub fn is_browser_icon_visible(&self) -> PageResult<bool> {
        let cell = self.cell(ResultField::Signature)?;
        self.region
            .base()
            .is_element_visible(Some(&cell), &locators::browser_icon())
    }

    /// Plugin filename, `None` when the table has no such column
    pub fn plugin_filename(&self) -> PageResult<Option<String>> {
        if self.is_plugin_filename_present() {
            self.cell_text(ResultField::PluginFilename).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Total crash count
    pub fn number_of_crashes(&self) -> PageResult<String> {
        self.cell_text(ResultField::NumberOfCrashes)
    }

    /// Windows crash count
    pub fn win(&self) -> PageResult<String> {
        self.cell_text(ResultField::Win)
    }

    /// Mac crash count
    pub fn mac(&self) -> PageResult<String> {
        self.cell_text(ResultField::Mac)
    }

    /// Linux crash count
    pub fn lin(&self) -> PageResult<String> {
        self.cell_text(ResultField::Lin)
    }

    /// Bug ids cell text
    pub fn bugzilla_ids(&self) -> PageResult<String> {
        self.cell_text(ResultField::BugzillaIds)
    }

    /// Expand the full bug id list of this row
    pub fn click_bugzilla_more(self) -> PageResult<AdvancedSearchPage<'s, D>> {
        self.cell(ResultField::BugzillaIds)?
            .find(&locators::bug_more_link())?
            .click()?;
        log_transition(PageKind::AdvancedSearch, PageKind::AdvancedSearch, "bugzilla more");
        Ok(AdvancedSearchPage::new(self.region.session()))
    }
}

/// One header cell of the search results table
#[derive(Debug)]
pub struct ResultHeader<'s, D: Driver> {
    session: &'s Session<D>,
    root: D::Element,
}

impl<'s, D: Driver> ResultHeader<'s, D> {
    /// Header label
    pub fn text(&self) -> PageResult<String> {
        self.root.text()
    }

    /// Sort the table by this column
    pub fn click(self) -> PageResult<AdvancedSearchPage<'s, D>> {
        self.root.click()?;
        log_transition(PageKind::AdvancedSearch, PageKind::AdvancedSearch, "sort");
        Ok(AdvancedSearchPage::new(self.session))
    }

    /// Current sort indicator
    pub fn sort_state(&self) -> PageResult<SortState> {
        Ok(SortState::from_class(self.root.attribute("class")?.as_deref()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod sort_state_tests {
        use super::*;

        #[test]
        fn test_ascending() {
            assert_eq!(
                SortState::from_class(Some("header headerSortDown")),
                SortState::Ascending
            );
        }

        #[test]
        fn test_descending() {
            assert_eq!(
                SortState::from_class(Some("header headerSortUp")),
                SortState::Descending
            );
        }

        #[test]
        fn test_unsorted() {
            assert_eq!(SortState::from_class(Some("header")), SortState::Unsorted);
            assert_eq!(SortState::from_class(Some("")), SortState::Unsorted);
            assert_eq!(SortState::from_class(None), SortState::Unsorted);
        }

        #[test]
        fn test_display() {
            assert_eq!(SortState::Ascending.to_string(), "ascending");
            assert_eq!(SortState::Unsorted.to_string(), "unsorted");
        }
    }

    proptest! {
        #[test]
        fn prop_down_marker_wins_over_up(
            prefix in "[a-z ]{0,10}",
            middle in "[a-z ]{0,10}",
            suffix in "[a-z ]{0,10}",
            up_first in any::<bool>(),
        ) {
            let (first, second) = if up_first {
                ("headerSortUp", "headerSortDown")
            } else {
                ("headerSortDown", "headerSortUp")
            };
            let class = format!("{prefix}{first}{middle}{second}{suffix}");
            prop_assert_eq!(SortState::from_class(Some(&class)), SortState::Ascending);
        }

        #[test]
        fn prop_lowercase_classes_are_unsorted(class in proptest::option::of("[a-z -]{0,40}")) {
            prop_assert_eq!(SortState::from_class(class.as_deref()), SortState::Unsorted);
        }

        #[test]
        fn prop_markers_win_over_noise(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
            let down = format!("{prefix}headerSortDown{suffix}");
            let up = format!("{prefix}headerSortUp{suffix}");
            prop_assert_eq!(SortState::from_class(Some(&down)), SortState::Ascending);
            prop_assert_eq!(SortState::from_class(Some(&up)), SortState::Descending);
        }
    }
}
