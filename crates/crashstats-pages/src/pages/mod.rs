//! Concrete page objects, one module per screen.

pub mod advanced_search;
pub mod crash_report;
pub mod home;
pub mod nightly_builds;
pub mod per_active_daily_user;
pub mod products_links;
pub mod signature_report;
pub mod status;
pub mod top_changers;
pub mod top_crashers;
pub mod top_crashers_by_site;

pub use advanced_search::{AdvancedSearchPage, ResultHeader, ResultRow, SortState};
pub use crash_report::{CrashReportPage, ReportRow};
pub use home::{CrashReportsRegion, HomePage};
pub use nightly_builds::NightlyBuildsPage;
pub use per_active_daily_user::PerActiveDailyUserPage;
pub use products_links::ProductsLinksPage;
pub use signature_report::SignatureReportPage;
pub use status::StatusPage;
pub use top_changers::TopChangersPage;
pub use top_crashers::{SignatureItem, TopCrashersPage};
pub use top_crashers_by_site::TopCrashersBySitePage;
