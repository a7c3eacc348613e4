//! Home page: one panel per release channel.

use super::top_changers::TopChangersPage;
use super::top_crashers::TopCrashersPage;
use crate::driver::{Driver, Element};
use crate::page::{log_transition, Page, PageKind};
use crate::region::Region;
use crate::result::{PageError, PageResult};
use crate::session::Session;

/// Locators used by the home page
pub mod locators {
    use crate::locator::Locator;

    /// Top crashers link of the first release channel panel
    #[must_use]
    pub fn first_product_top_crashers_link() -> Locator {
        Locator::css(".release_channel > ul > li:nth-of-type(1) > a")
    }

    /// One panel per release channel
    #[must_use]
    pub fn release_channels() -> Locator {
        Locator::css(".release_channel")
    }

    /// Top crashers link inside a release channel panel
    #[must_use]
    pub fn channel_top_crashers_link() -> Locator {
        Locator::css("ul > li:nth-of-type(1) > a")
    }

    /// Top changers links across the release channel panels
    #[must_use]
    pub fn top_changers_links() -> Locator {
        Locator::css(".release_channel > ul > li:nth-of-type(2) > a")
    }

    /// Selected-state marker inside a navigation link
    #[must_use]
    pub fn selected_marker() -> Locator {
        Locator::css(".selected")
    }

    /// Navigation link with the given label ("Top Crashers", "Top Changers")
    #[must_use]
    pub fn top_link(label: &str) -> Locator {
        Locator::link_text(format!("Top {label}"))
    }

    /// Heading of a release channel panel
    #[must_use]
    pub fn channel_heading() -> Locator {
        Locator::css("h4")
    }

    /// Top crasher link inside a release channel panel
    #[must_use]
    pub fn channel_first_link() -> Locator {
        Locator::css("li:nth-of-type(1) > a")
    }
}

/// The application landing page
#[derive(Debug)]
pub struct HomePage<'s, D: Driver> {
    session: &'s Session<D>,
    product: Option<String>,
}

impl<'s, D: Driver> Page<'s, D> for HomePage<'s, D> {
    const KIND: PageKind = PageKind::Home;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> HomePage<'s, D> {
    /// Navigate to the base URL; this is the initial state of every test
    pub fn open(session: &'s Session<D>) -> PageResult<Self> {
        session.navigate_to(PageKind::Home.entry_path().unwrap_or("/"))?;
        Ok(Self::new(session))
    }

    /// Bind to the home page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self {
            session,
            product: None,
        }
    }

    /// Bind to the home page of `product`, reached through a product link
    #[must_use]
    pub fn for_product(session: &'s Session<D>, product: impl Into<String>) -> Self {
        Self {
            session,
            product: Some(product.into()),
        }
    }

    /// Product this home page is scoped to, if any
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    /// Open the top crashers of the first release channel
    pub fn click_first_product_top_crashers_link(self) -> PageResult<TopCrashersPage<'s, D>> {
        self.session
            .driver()
            .find(&locators::first_product_top_crashers_link())?
            .click()?;
        log_transition(Self::KIND, PageKind::TopCrashers, "first product top crashers");
        Ok(TopCrashersPage::new(self.session))
    }

    /// Follow the "Top Crashers" navigation link.
    ///
    /// Fails with `NotFound` unless the first channel's top crashers link
    /// shows a displayed `.selected` marker after the click.
    pub fn click_top_crashers_link(self) -> PageResult<TopCrashersPage<'s, D>> {
        self.click_top_link("Crashers")?;
        let link = self
            .session
            .driver()
            .find(&locators::release_channels())?
            .find(&locators::channel_top_crashers_link())?;
        require_selected(&link)?;
        log_transition(Self::KIND, PageKind::TopCrashers, "top crashers link");
        Ok(TopCrashersPage::new(self.session))
    }

    /// Follow the "Top Changers" navigation link.
    ///
    /// Fails with `NotFound` unless the top changers link shows a displayed
    /// `.selected` marker after the click.
    pub fn click_top_changers_link(self) -> PageResult<TopChangersPage<'s, D>> {
        self.click_top_link("Changers")?;
        let link = self.session.driver().find(&locators::top_changers_links())?;
        require_selected(&link)?;
        log_transition(Self::KIND, PageKind::TopChangers, "top changers link");
        Ok(TopChangersPage::new(self.session))
    }

    fn click_top_link(&self, label: &str) -> PageResult<()> {
        self.session.driver().find(&locators::top_link(label))?.click()
    }

    /// One region per release channel panel, queried now
    pub fn top_crashers(&self) -> PageResult<Vec<CrashReportsRegion<'s, D>>> {
        Ok(Region::collect(self.session, &locators::release_channels())?
            .into_iter()
            .map(|region| CrashReportsRegion { region })
            .collect())
    }
}

/// Fail unless `link` carries a displayed selection marker
fn require_selected<E: Element>(link: &E) -> PageResult<()> {
    let marker = locators::selected_marker();
    if link.find(&marker)?.is_displayed()? {
        Ok(())
    } else {
        Err(PageError::NotFound {
            locator: format!("displayed {marker}"),
        })
    }
}

/// One release channel panel on the home page
#[derive(Debug)]
pub struct CrashReportsRegion<'s, D: Driver> {
    region: Region<'s, D>,
}

impl<'s, D: Driver> CrashReportsRegion<'s, D> {
    /// Channel heading, e.g. "Firefox 15.0a1"
    pub fn version_name(&self) -> PageResult<String> {
        self.region.text_of(&locators::channel_heading())
    }

    /// Open the top crashers of this channel
    pub fn click_top_crasher(self) -> PageResult<TopCrashersPage<'s, D>> {
        self.region.click(&locators::channel_first_link())?;
        log_transition(PageKind::Home, PageKind::TopCrashers, "channel top crasher");
        Ok(TopCrashersPage::new(self.region.session()))
    }
}
