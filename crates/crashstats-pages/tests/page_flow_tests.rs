//! Navigation and accessor tests for the individual pages.

use crashstats_pages::mock::{ClickEffect, MockDriver, MockNode, NodeId};
use crashstats_pages::{
    AdvancedSearchPage, HomePage, Locator, NightlyBuildsPage, Page, PageError, PageKind,
    PerActiveDailyUserPage, Session, SignatureReportPage, SortState, StatusPage,
    TopCrashersBySitePage, TopCrashersPage,
};

fn session_with(build: impl FnOnce(&MockDriver)) -> Session<MockDriver> {
    let driver = MockDriver::new();
    build(&driver);
    Session::new(driver)
}

// ============================================================================
// Home
// ============================================================================

#[test]
fn home_open_navigates_to_base_url() {
    let session = session_with(|_| {});
    let home = HomePage::open(&session).unwrap();
    assert_eq!(home.kind(), PageKind::Home);
    assert_eq!(home.product(), None);
    assert_eq!(
        session.driver().current_url(),
        "https://crash-stats.allizom.org/"
    );
}

#[test]
fn home_channel_regions_are_scoped() {
    let session = session_with(|d| {
        let panel = Locator::css(".release_channel");
        let heading = Locator::css("h4");
        let link = Locator::css("li:nth-of-type(1) > a");
        for name in ["Firefox 15.0a1", "Firefox 14.0a2", "Firefox 13.0"] {
            let id = d.add(&panel, MockNode::new());
            d.append(id, &heading, MockNode::new().text(name));
            d.append(id, &link, MockNode::new().text("Top Crashers"));
        }
    });
    let home = HomePage::new(&session);
    let channels = home.top_crashers().unwrap();
    let names: Vec<String> = channels
        .iter()
        .map(|c| c.version_name().unwrap())
        .collect();
    assert_eq!(names, ["Firefox 15.0a1", "Firefox 14.0a2", "Firefox 13.0"]);

    let mut channels = channels;
    let top = channels.remove(1).click_top_crasher().unwrap();
    assert_eq!(top.kind(), PageKind::TopCrashers);
    assert_eq!(session.driver().history().len(), 1);
}

#[test]
fn home_top_crashers_link_checks_selection() {
    let mut link: NodeId = 0;
    let session = session_with(|d| {
        link = d.add(&Locator::link_text("Top Crashers"), MockNode::new());
        let panel = d.add(&Locator::css(".release_channel"), MockNode::new());
        let first = d.append(panel, &Locator::css("ul > li:nth-of-type(1) > a"), MockNode::new());
        d.append(first, &Locator::css(".selected"), MockNode::new());
    });
    let top = HomePage::new(&session).click_top_crashers_link().unwrap();
    assert_eq!(top.kind(), PageKind::TopCrashers);
    assert!(session.driver().was_clicked(link));
}

#[test]
fn home_top_changers_link_without_selection_fails() {
    let session = session_with(|d| {
        d.add(&Locator::link_text("Top Changers"), MockNode::new());
        d.add(
            &Locator::css(".release_channel > ul > li:nth-of-type(2) > a"),
            MockNode::new(),
        );
    });
    let err = HomePage::new(&session).click_top_changers_link().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn home_top_crashers_link_hidden_marker_fails() {
    let session = session_with(|d| {
        d.add(&Locator::link_text("Top Crashers"), MockNode::new());
        let panel = d.add(&Locator::css(".release_channel"), MockNode::new());
        let first = d.append(panel, &Locator::css("ul > li:nth-of-type(1) > a"), MockNode::new());
        d.append(first, &Locator::css(".selected"), MockNode::new().hidden());
    });
    let err = HomePage::new(&session).click_top_crashers_link().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn home_top_changers_link_hidden_marker_fails() {
    let session = session_with(|d| {
        d.add(&Locator::link_text("Top Changers"), MockNode::new());
        let link = d.add(
            &Locator::css(".release_channel > ul > li:nth-of-type(2) > a"),
            MockNode::new(),
        );
        d.append(link, &Locator::css(".selected"), MockNode::new().hidden());
    });
    let err = HomePage::new(&session).click_top_changers_link().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn home_top_changers_link() {
    let session = session_with(|d| {
        d.add(&Locator::link_text("Top Changers"), MockNode::new());
        let link = d.add(
            &Locator::css(".release_channel > ul > li:nth-of-type(2) > a"),
            MockNode::new(),
        );
        d.append(link, &Locator::css(".selected"), MockNode::new());
    });
    let changers = HomePage::new(&session).click_top_changers_link().unwrap();
    assert_eq!(changers.kind(), PageKind::TopChangers);
}

#[test]
fn home_first_product_top_crashers() {
    let mut link: NodeId = 0;
    let session = session_with(|d| {
        link = d.add(
            &Locator::css(".release_channel > ul > li:nth-of-type(1) > a"),
            MockNode::new(),
        );
    });
    let top = HomePage::new(&session)
        .click_first_product_top_crashers_link()
        .unwrap();
    assert_eq!(top.kind(), PageKind::TopCrashers);
    assert!(session.driver().was_clicked(link));
}

// ============================================================================
// Top crashers filters
// ============================================================================

fn filtered_top_crashers() -> (Session<MockDriver>, Vec<NodeId>) {
    let mut ids = Vec::new();
    let session = session_with(|d| {
        d.add(&Locator::id("current-product"), MockNode::new().text("Firefox"));
        d.add(&Locator::id("current-version"), MockNode::new().text("15.0a1"));
        let types = Locator::css(".tc-duration-type.tc-filter > li > a");
        for label in ["All", "Browser", "Plugin"] {
            ids.push(d.add(&types, MockNode::new().text(label)));
        }
        let days = Locator::css(".tc-duration-days.tc-filter > li > a");
        for label in ["3", "7", "14", "28"] {
            ids.push(d.add(&days, MockNode::new().text(label)));
        }
        d.add(
            &Locator::css("ul.tc-duration-type li a.selected"),
            MockNode::new().text("Browser"),
        );
        d.add(
            &Locator::css("ul.tc-duration-days li a.selected"),
            MockNode::new().text("7"),
        );
    });
    (session, ids)
}

#[test]
fn top_crashers_heading() {
    let (session, _) = filtered_top_crashers();
    let page = TopCrashersPage::new(&session);
    assert_eq!(page.page_heading_product().unwrap(), "Firefox");
    assert_eq!(page.page_heading_version().unwrap(), "15.0a1");
    assert!(!page.results_found().unwrap());
}

#[test]
fn top_crashers_filter_by_exact_label() {
    let (session, ids) = filtered_top_crashers();
    let page = TopCrashersPage::new(&session);

    let filtered = page.click_filter_by("Browser").unwrap().unwrap();
    assert!(session.driver().was_clicked(ids[1]));
    assert_eq!(filtered.current_filter_type().unwrap(), "Browser");

    // same filter again still matches
    assert!(filtered.click_filter_by("Browser").unwrap().is_some());
}

#[test]
fn top_crashers_filter_days() {
    let (session, ids) = filtered_top_crashers();
    let page = TopCrashersPage::new(&session);

    let filtered = page.click_filter_days_by("7").unwrap().unwrap();
    assert!(session.driver().was_clicked(ids[4]));
    assert_eq!(filtered.current_days_filter().unwrap(), "7");
}

#[test]
fn top_crashers_filter_miss_leaves_page() {
    let (session, _) = filtered_top_crashers();
    let page = TopCrashersPage::new(&session);

    assert!(page.click_filter_by("Content").unwrap().is_none());
    assert!(page.click_filter_days_by("30").unwrap().is_none());
    assert!(!session.driver().was_called("click:"));
    assert_eq!(page.page_heading_product().unwrap(), "Firefox");
}

#[test]
fn top_crashers_reads_are_idempotent() {
    let (session, _) = filtered_top_crashers();
    let row = Locator::css("#signatureList tbody tr");
    session.driver().add(&row, MockNode::new().text("empty signature"));
    let valid = session.driver().add(&row, MockNode::new().text("1 js::GC"));
    session
        .driver()
        .append(valid, &Locator::css("a.signature"), MockNode::new().text("js::GC"));
    let page = TopCrashersPage::new(&session);

    assert_eq!(
        page.current_days_filter().unwrap(),
        page.current_days_filter().unwrap()
    );
    assert_eq!(
        page.current_filter_type().unwrap(),
        page.current_filter_type().unwrap()
    );
    assert_eq!(
        page.valid_signature_items().unwrap().len(),
        page.valid_signature_items().unwrap().len()
    );
    assert_eq!(page.valid_signature_items().unwrap().len(), 1);
    assert!(!session.driver().was_called("click:"));
}

#[test]
fn top_crashers_current_filters_read_first_selected_only() {
    let session = session_with(|d| {
        let days = Locator::css("ul.tc-duration-days li a.selected");
        d.add(&days, MockNode::new().text("7"));
        d.add(&days, MockNode::new().text("14"));
        let types = Locator::css("ul.tc-duration-type li a.selected");
        d.add(&types, MockNode::new().text("Browser"));
        d.add(&types, MockNode::new().text("Plugin"));
    });
    let page = TopCrashersPage::new(&session);
    assert_eq!(page.current_days_filter().unwrap(), "7");
    assert_eq!(page.current_days_filter().unwrap(), "7");
    assert_eq!(page.current_filter_type().unwrap(), "Browser");
    assert_eq!(page.current_filter_type().unwrap(), "Browser");
}

#[test]
fn top_crashers_signature_icons() {
    let session = session_with(|d| {
        let row = d.add(&Locator::css("#signatureList tbody tr"), MockNode::new().text("1 a"));
        d.append(row, &Locator::css("a.signature"), MockNode::new().text("a"));
        d.append(row, &Locator::css("div img.plugin"), MockNode::new());
        d.append(row, &Locator::css("div img.browser"), MockNode::new().hidden());
    });
    let items = TopCrashersPage::new(&session).signature_items().unwrap();
    assert!(items[0].is_plugin_icon_visible().unwrap());
    assert!(!items[0].is_browser_icon_visible().unwrap());
    assert!(!items[0].is_placeholder().unwrap());
}

// ============================================================================
// Advanced search form
// ============================================================================

fn search_form() -> (Session<MockDriver>, Vec<NodeId>) {
    let mut options = Vec::new();
    let session = session_with(|d| {
        let select = d.add(&Locator::id("product"), MockNode::new());
        let option = Locator::tag_name("option");
        for (i, name) in ["Firefox", "Thunderbird", "SeaMonkey"].iter().enumerate() {
            let node = MockNode::new().text(*name);
            let node = if i == 0 { node.selected() } else { node };
            let id = d.append(select, &option, node);
            d.on_click(id, ClickEffect::Select(id));
            options.push(id);
        }
        let version = d.add(&Locator::id("version"), MockNode::new());
        d.append(version, &option, MockNode::new().text("Firefox:15.0a1"));
        let os = d.add(&Locator::id("platform"), MockNode::new());
        d.append(os, &option, MockNode::new().text("Windows"));
        d.add(&Locator::id("query_submit"), MockNode::new());
        d.add(&Locator::id("build_id"), MockNode::new());
        let radio = Locator::css(".radio-item > label > input");
        d.add(&radio, MockNode::new());
        d.add(&radio, MockNode::new());
        let text = Locator::css(".body.notitle p");
        d.add(&text, MockNode::new().text("Results within 7 days"));
        d.add(&text, MockNode::new().text("No results were found."));
    });
    (session, options)
}

#[test]
fn search_form_selects_by_visible_text() {
    let (session, options) = search_form();
    let page = AdvancedSearchPage::new(&session);

    page.select_product("Thunderbird").unwrap();
    page.select_version("Firefox:15.0a1").unwrap();
    page.select_os("Windows").unwrap();
    assert!(session.driver().is_selected(options[1]));
    assert_eq!(page.currently_selected_product().unwrap(), "Firefox");
    assert_eq!(
        page.product_list().unwrap(),
        ["Firefox", "Thunderbird", "SeaMonkey"]
    );
}

#[test]
fn search_form_unknown_option_is_not_found() {
    let (session, _) = search_form();
    let page = AdvancedSearchPage::new(&session);
    assert!(page.select_product("Camino").unwrap_err().is_not_found());
}

#[test]
fn search_form_text_and_radios() {
    let (session, _) = search_form();
    let page = AdvancedSearchPage::new(&session);

    page.type_build_id("20120601030522").unwrap();
    assert!(session.driver().was_called("send_keys:"));
    assert_eq!(page.query_results_text(1).unwrap(), "No results were found.");
    assert!(page.query_results_text(2).unwrap_err().is_not_found());

    page.select_radio_button(1).unwrap();
    assert!(page.select_radio_button(5).unwrap_err().is_not_found());
}

#[test]
fn search_form_build_id_from_browser() {
    let (session, _) = search_form();
    session.driver().set_script_result(
        "return navigator.buildID;",
        serde_json::json!("20120601030522"),
    );
    let page = AdvancedSearchPage::new(&session);
    assert_eq!(page.build_id().unwrap(), "20120601030522");
}

#[test]
fn search_form_filter_reports() {
    let (session, _) = search_form();
    let page = AdvancedSearchPage::new(&session).filter_reports().unwrap();
    assert_eq!(page.kind(), PageKind::AdvancedSearch);
    assert!(session.driver().was_called("click:"));
}

// ============================================================================
// Advanced search results
// ============================================================================

struct ResultIds {
    link: NodeId,
    more: NodeId,
}

fn result_table() -> (Session<MockDriver>, ResultIds) {
    let mut ids = ResultIds { link: 0, more: 0 };
    let session = session_with(|d| {
        let header = Locator::css("#signatureList > thead > tr > th");
        d.add(&header, MockNode::new().text("Rank"));
        d.add(&header, MockNode::new().text("Signature").attr("class", "header"));
        d.add(&header, MockNode::new().text("Product"));
        d.add(
            &header,
            MockNode::new()
                .text("# Crashes")
                .attr("class", "header headerSortDown"),
        );
        d.add(
            &header,
            MockNode::new().text("Win").attr("class", "header headerSortUp"),
        );

        let row = d.add(&Locator::css("#signatureList > tbody > tr"), MockNode::new());
        let td = Locator::tag_name("td");
        let mut cells = Vec::new();
        for text in ["1", "js::GC", "Firefox", "120", "80", "30", "10", "123456"] {
            cells.push(d.append(row, &td, MockNode::new().text(text)));
        }
        ids.link = d.append(cells[1], &Locator::tag_name("a"), MockNode::new().text("js::GC"));
        d.append(
            cells[1],
            &Locator::css("div.signature-icons > img.browser"),
            MockNode::new(),
        );
        ids.more = d.append(cells[7], &Locator::css("a.bug_ids_more"), MockNode::new());
    });
    (session, ids)
}

#[test]
fn result_row_accessors() {
    let (session, _) = result_table();
    let page = AdvancedSearchPage::new(&session);
    assert!(page.results_found().unwrap());

    let rows = page.results().unwrap();
    let row = &rows[0];
    assert_eq!(row.rank().unwrap(), "1");
    assert_eq!(row.signature().unwrap(), "js::GC");
    assert_eq!(row.number_of_crashes().unwrap(), "120");
    assert_eq!(row.win().unwrap(), "80");
    assert_eq!(row.mac().unwrap(), "30");
    assert_eq!(row.lin().unwrap(), "10");
    assert_eq!(row.bugzilla_ids().unwrap(), "123456");
    assert!(row.is_browser_icon_visible().unwrap());
    assert!(!row.is_plugin_icon_visible().unwrap());
}

#[test]
fn result_reads_are_idempotent() {
    let (session, _) = result_table();
    let page = AdvancedSearchPage::new(&session);
    let rows = page.results().unwrap();
    let row = &rows[0];

    assert_eq!(row.number_of_crashes().unwrap(), row.number_of_crashes().unwrap());
    assert_eq!(row.win().unwrap(), row.win().unwrap());
    let header = page.results_table_header(3).unwrap();
    assert_eq!(header.sort_state().unwrap(), header.sort_state().unwrap());
    assert_eq!(page.results().unwrap().len(), rows.len());
    assert!(!session.driver().was_called("click:"));
}

#[test]
fn result_row_short_of_cells_is_not_found() {
    let session = session_with(|d| {
        let header = Locator::css("#signatureList > thead > tr > th");
        for label in ["Rank", "Signature", "Product"] {
            d.add(&header, MockNode::new().text(label));
        }
        let row = d.add(&Locator::css("#signatureList > tbody > tr"), MockNode::new());
        for text in ["1", "js::GC", "Firefox"] {
            d.append(row, &Locator::tag_name("td"), MockNode::new().text(text));
        }
    });
    let rows = AdvancedSearchPage::new(&session).results().unwrap();
    assert_eq!(rows[0].signature().unwrap(), "js::GC");
    assert!(rows[0].number_of_crashes().unwrap_err().is_not_found());
}

#[test]
fn result_row_signature_opens_report() {
    let (session, ids) = result_table();
    let mut rows = AdvancedSearchPage::new(&session).results().unwrap();
    let report = rows.remove(0).click_signature().unwrap();
    assert_eq!(report.kind(), PageKind::SignatureReport);
    assert!(session.driver().was_clicked(ids.link));
}

#[test]
fn first_signature_opens_report() {
    let (session, ids) = result_table();
    let report = AdvancedSearchPage::new(&session)
        .click_first_signature()
        .unwrap();
    assert_eq!(report.kind(), PageKind::SignatureReport);
    assert!(session.driver().was_clicked(ids.link));
}

#[test]
fn bugzilla_more_stays_on_search() {
    let (session, ids) = result_table();
    let mut rows = AdvancedSearchPage::new(&session).results().unwrap();
    let page = rows.remove(0).click_bugzilla_more().unwrap();
    assert_eq!(page.kind(), PageKind::AdvancedSearch);
    assert!(session.driver().was_clicked(ids.more));
}

#[test]
fn header_sort_states() {
    let (session, _) = result_table();
    let page = AdvancedSearchPage::new(&session);

    let sort = |column| page.results_table_header(column).unwrap().sort_state().unwrap();
    assert_eq!(sort(0), SortState::Unsorted);
    assert_eq!(sort(1), SortState::Unsorted);
    assert_eq!(sort(3), SortState::Ascending);
    assert_eq!(sort(4), SortState::Descending);
    assert!(page.results_table_header(9).unwrap_err().is_not_found());
}

#[test]
fn header_click_resorts() {
    let (session, _) = result_table();
    let header = AdvancedSearchPage::new(&session)
        .results_table_header(3)
        .unwrap();
    assert_eq!(header.text().unwrap(), "# Crashes");
    let page = header.click().unwrap();
    assert_eq!(page.kind(), PageKind::AdvancedSearch);
}

#[test]
fn driver_failure_propagates_from_results() {
    let (session, _) = result_table();
    session.driver().fail_with("session deleted");
    let err = AdvancedSearchPage::new(&session).results().unwrap_err();
    assert!(matches!(err, PageError::Driver { .. }));
}

// ============================================================================
// Signature report
// ============================================================================

#[test]
fn signature_report_total_items() {
    let session = session_with(|d| {
        d.add(&Locator::css("span.totalItems"), MockNode::new().text("1,234,567"));
    });
    let page = SignatureReportPage::new(&session);
    assert_eq!(page.total_items_label().unwrap(), "1234567");
    assert_eq!(page.total_items().unwrap(), 1_234_567);
}

#[test]
fn signature_report_total_items_not_numeric() {
    let session = session_with(|d| {
        d.add(&Locator::css("span.totalItems"), MockNode::new().text("n/a"));
    });
    let err = SignatureReportPage::new(&session).total_items().unwrap_err();
    assert!(matches!(err, PageError::Parse { .. }));
}

// ============================================================================
// Crashes per active daily user
// ============================================================================

fn daily_user_report() -> (Session<MockDriver>, NodeId) {
    let mut date: NodeId = 0;
    let session = session_with(|d| {
        let select = d.add(
            &Locator::id("daily_search_version_form_products"),
            MockNode::new(),
        );
        d.append(
            select,
            &Locator::tag_name("option"),
            MockNode::new().text("Firefox").selected(),
        );
        date = d.add(
            &Locator::css(".daily_search_body .date[name=\"date_start\"]"),
            MockNode::new(),
        );
        d.add(&Locator::id("daily_search_version_form_submit"), MockNode::new());
        d.add(&Locator::id("crash_data"), MockNode::new());
        let row = Locator::css("#crash_data > tbody > tr");
        for first in ["2012-06-01", "2012-06-02", "Total"] {
            let id = d.add(&row, MockNode::new());
            d.append(id, &Locator::css("td:nth-child(1)"), MockNode::new().text(first));
        }
    });
    (session, date)
}

#[test]
fn daily_user_table() {
    let (session, _) = daily_user_report();
    let page = PerActiveDailyUserPage::new(&session);
    assert_eq!(page.product_select().unwrap(), "Firefox");
    assert!(page.is_table_visible().unwrap());
    assert_eq!(page.table_row_count().unwrap(), 3);
    assert_eq!(page.last_row_date_value().unwrap(), "2012-06-02");
}

#[test]
fn daily_user_start_date_replaces_value() {
    let (session, date) = daily_user_report();
    let page = PerActiveDailyUserPage::new(&session);
    page.type_start_date("2012-05-01").unwrap();
    page.type_start_date("2012-05-15").unwrap();
    assert_eq!(session.driver().typed_value(date), "2012-05-15");

    let page = page.click_generate_button().unwrap();
    assert_eq!(page.kind(), PageKind::PerActiveDailyUser);
}

#[test]
fn daily_user_mixed_content_warning() {
    let (session, _) = daily_user_report();
    let page = PerActiveDailyUserPage::new(&session);
    assert!(!page.is_mixed_content_warning_shown().unwrap());
    session.driver().set_alert_present(true);
    assert!(page.is_mixed_content_warning_shown().unwrap());
}

#[test]
fn daily_user_totals_only_is_not_found() {
    let session = session_with(|d| {
        let row = d.add(&Locator::css("#crash_data > tbody > tr"), MockNode::new());
        d.append(row, &Locator::css("td:nth-child(1)"), MockNode::new().text("Total"));
    });
    let page = PerActiveDailyUserPage::new(&session);
    assert!(page.last_row_date_value().unwrap_err().is_not_found());
    assert!(!page.is_table_visible().unwrap());
}

// ============================================================================
// Small pages
// ============================================================================

#[test]
fn top_crashers_by_site_headers() {
    let session = session_with(|d| {
        d.add(&Locator::id("tcburl-product"), MockNode::new().text("Firefox"));
        d.add(&Locator::id("tcburl-version"), MockNode::new().text("15.0a1"));
    });
    let page = TopCrashersBySitePage::new(&session);
    assert_eq!(page.product_header().unwrap(), "Firefox");
    assert_eq!(page.product_version_header().unwrap(), "15.0a1");
}

#[test]
fn nightly_builds_ftp_link() {
    let mut link: NodeId = 0;
    let session = session_with(|d| {
        link = d.add(
            &Locator::css(".notitle > p > a"),
            MockNode::new().attr("href", "ftp://ftp.mozilla.org/pub/firefox/nightly/"),
        );
    });
    let page = NightlyBuildsPage::new(&session);
    assert_eq!(
        page.link_to_ftp().unwrap().as_deref(),
        Some("ftp://ftp.mozilla.org/pub/firefox/nightly/")
    );
    page.click_link_to_ftp().unwrap();
    assert!(session.driver().was_clicked(link));
}

#[test]
fn nightly_builds_link_without_href() {
    let session = session_with(|d| {
        d.add(&Locator::css(".notitle > p > a"), MockNode::new());
    });
    assert_eq!(NightlyBuildsPage::new(&session).link_to_ftp().unwrap(), None);
}

fn status_page(graphs: usize) -> Session<MockDriver> {
    session_with(|d| {
        d.add(
            &Locator::css("div.panel > div > table.server_status"),
            MockNode::new(),
        );
        for _ in 0..graphs {
            d.add(
                &Locator::css("div.panel > div > div.server-status-graph"),
                MockNode::new(),
            );
        }
    })
}

#[test]
fn status_sections() {
    let session = status_page(4);
    let page = StatusPage::new(&session);
    assert!(page.is_at_a_glance_present().unwrap());
    assert!(page.are_graphs_present().unwrap());
    assert!(!page.is_latest_raw_stats_present().unwrap());
}

#[test]
fn status_graph_count_must_be_exact() {
    for count in [0, 3, 5] {
        let session = status_page(count);
        assert!(!StatusPage::new(&session).are_graphs_present().unwrap());
    }
}
