//! Page identity and the transition model.
//!
//! Each screen of the application is a distinct page type implementing
//! [`Page`]. The set of screens is closed and enumerated by [`PageKind`].
//!
//! A method that changes the displayed screen returns the page type that
//! models the new screen. Unconditional transitions take `self` by value, so
//! the old page cannot be used afterwards; transitions that only happen when
//! a link with matching text exists borrow `&self` and return `Option`, since
//! a miss leaves the screen untouched. Regions obtained from a page before a
//! transition are stale and must be queried again.

use crate::base::PageBase;
use crate::driver::Driver;
use crate::session::Session;
use std::fmt;
use tracing::debug;

/// The screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Landing page with per-channel panels
    Home,
    /// Advanced search form and its results
    AdvancedSearch,
    /// Report list for one signature
    SignatureReport,
    /// Crashes per active daily user chart and table
    PerActiveDailyUser,
    /// Top crashers for a product/version
    TopCrashers,
    /// Top crashers grouped by site
    TopCrashersBySite,
    /// Nightly builds listing
    NightlyBuilds,
    /// Server status
    Status,
    /// List of product links
    ProductsLinks,
    /// Crash report listing
    CrashReport,
    /// Top changers
    TopChangers,
}

impl PageKind {
    /// Every page kind
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::AdvancedSearch,
        Self::SignatureReport,
        Self::PerActiveDailyUser,
        Self::TopCrashers,
        Self::TopCrashersBySite,
        Self::NightlyBuilds,
        Self::Status,
        Self::ProductsLinks,
        Self::CrashReport,
        Self::TopChangers,
    ];

    /// Human readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::AdvancedSearch => "advanced search",
            Self::SignatureReport => "signature report",
            Self::PerActiveDailyUser => "crashes per active daily user",
            Self::TopCrashers => "top crashers",
            Self::TopCrashersBySite => "top crashers by site",
            Self::NightlyBuilds => "nightly builds",
            Self::Status => "status",
            Self::ProductsLinks => "products",
            Self::CrashReport => "crash report",
            Self::TopChangers => "top changers",
        }
    }

    /// Path relative to the base URL for pages that can be opened directly
    #[must_use]
    pub const fn entry_path(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::ProductsLinks => Some("/products/"),
            _ => None,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A page object bound to a live session.
///
/// Accessors are only meaningful while the browser still shows the screen
/// identified by [`Page::KIND`]. Nothing checks this automatically.
pub trait Page<'s, D: Driver + 's> {
    /// Which screen this page models
    const KIND: PageKind;

    /// The session the page reads from
    fn session(&self) -> &'s Session<D>;

    /// Screen identity
    fn kind(&self) -> PageKind {
        Self::KIND
    }

    /// Presence/visibility/alert capability
    fn base(&self) -> PageBase<'s, D> {
        PageBase::new(self.session())
    }
}

pub(crate) fn log_transition(from: PageKind, to: PageKind, action: &str) {
    debug!(%from, %to, action, "page transition");
}
