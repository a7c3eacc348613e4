//! crashstats-pages: page objects for UI regression tests of Crash Stats
//!
//! Each screen of the crash-report web application is modelled as a typed
//! page bound to a shared browser [`Session`]. Tests drive the application
//! through these pages instead of raw selectors.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 crashstats-pages Architecture                 │
//! ├──────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐         │
//! │   │ Test       │    │ Page /     │    │ Driver     │         │
//! │   │ (Rust)     │───►│ Region     │───►│ (WebDriver │         │
//! │   │            │    │ objects    │    │  or Mock)  │         │
//! │   └────────────┘    └────────────┘    └────────────┘         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use crashstats_pages::mock::{MockDriver, MockNode};
//! use crashstats_pages::{HomePage, Locator, Session};
//!
//! let driver = MockDriver::new();
//! let panel = driver.add(&Locator::css(".release_channel"), MockNode::new());
//! driver.append(panel, &Locator::css("h4"), MockNode::new().text("Firefox 15.0a1"));
//!
//! let session = Session::new(driver);
//! let home = HomePage::open(&session).unwrap();
//! let channels = home.top_crashers().unwrap();
//! assert_eq!(channels[0].version_name().unwrap(), "Firefox 15.0a1");
//! ```

#![warn(missing_docs)]

mod base;
mod columns;
mod config;
mod driver;
mod locator;
mod page;
mod region;
mod result;
mod select;
mod session;

/// In-memory driver for testing page objects without a browser
pub mod mock;

/// Concrete page objects
pub mod pages;

/// Bounded polling waits
pub mod wait;

pub use base::PageBase;
pub use columns::{ColumnLayout, ResultField, PLUGIN_HEADER_INDEX, PLUGIN_HEADER_TEXT};
pub use config::{
    SessionConfig, DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL_MS, DEFAULT_REPORTS_TAB_TIMEOUT_MS,
    ENV_BASE_URL, ENV_POLL_INTERVAL_MS, ENV_REPORTS_TIMEOUT_MS,
};
pub use driver::{Driver, Element};
pub use locator::{Locator, Strategy};
pub use page::{Page, PageKind};
pub use pages::{
    AdvancedSearchPage, CrashReportPage, CrashReportsRegion, HomePage, NightlyBuildsPage,
    PerActiveDailyUserPage, ProductsLinksPage, ReportRow, ResultHeader, ResultRow, SignatureItem,
    SignatureReportPage, SortState, StatusPage, TopChangersPage, TopCrashersBySitePage,
    TopCrashersPage,
};
pub use region::Region;
pub use result::{PageError, PageResult};
pub use select::{first_selected_option_text, option_texts, select_by_visible_text};
pub use session::Session;
pub use wait::{wait_for, WaitOptions, WaitResult};
