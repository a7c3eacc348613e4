//! Product index (`/products/`).

use super::home::HomePage;
use crate::driver::{Driver, Element};
use crate::page::{log_transition, Page, PageKind};
use crate::result::PageResult;
use crate::session::Session;

/// Locators used by the products page
pub mod locators {
    use crate::locator::Locator;

    /// One link per product
    #[must_use]
    pub fn products() -> Locator {
        Locator::css(".body li a")
    }

    /// Page title
    #[must_use]
    pub fn page_name() -> Locator {
        Locator::css("#mainbody h2")
    }
}

/// Links to every product's home page
#[derive(Debug)]
pub struct ProductsLinksPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for ProductsLinksPage<'s, D> {
    const KIND: PageKind = PageKind::ProductsLinks;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> ProductsLinksPage<'s, D> {
    /// Navigate to `<base>/products/`
    pub fn open(session: &'s Session<D>) -> PageResult<Self> {
        session.navigate_to(Self::KIND.entry_path().unwrap_or("/products/"))?;
        Ok(Self::new(session))
    }

    /// Bind to the products page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    /// Page title
    pub fn products_page_name(&self) -> PageResult<String> {
        self.session.driver().find(&locators::page_name())?.text()
    }

    /// Follow the product link labelled exactly `product`.
    ///
    /// Returns the product's home page, or `None` when no link matches and
    /// nothing was clicked. After a match the browser has left this page, so
    /// `self` must not be read again.
    pub fn click_product(&self, product: &str) -> PageResult<Option<HomePage<'s, D>>> {
        for link in self.session.driver().find_all(&locators::products())? {
            if link.text()? == product {
                link.click()?;
                log_transition(Self::KIND, PageKind::Home, "product link");
                return Ok(Some(HomePage::for_product(self.session, product)));
            }
        }
        Ok(None)
    }
}
