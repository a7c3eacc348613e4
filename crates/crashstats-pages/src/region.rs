//! Regions: page fragments scoped to one DOM subtree.
//!
//! A [`Region`] models one repeating unit of a page (a table row, a product
//! panel). Every lookup it performs is relative to its bounding element, so
//! two rows with identical inner locators never see each other's content.
//!
//! Regions are produced fresh by collection accessors and are never cached.
//! After any transition the caller re-queries the collection.

use crate::base::PageBase;
use crate::driver::{Driver, Element};
use crate::locator::Locator;
use crate::result::{PageError, PageResult};
use crate::session::Session;

/// A session reference plus the element that bounds this region
#[derive(Debug)]
pub struct Region<'s, D: Driver> {
    session: &'s Session<D>,
    root: D::Element,
}

impl<'s, D: Driver> Region<'s, D> {
    /// Bind a region to its bounding element
    #[must_use]
    pub const fn new(session: &'s Session<D>, root: D::Element) -> Self {
        Self { session, root }
    }

    /// Materialize one region per element matching `locator` in the document
    pub fn collect(session: &'s Session<D>, locator: &Locator) -> PageResult<Vec<Self>> {
        Ok(session
            .driver()
            .find_all(locator)?
            .into_iter()
            .map(|root| Self::new(session, root))
            .collect())
    }

    /// The session this region belongs to
    #[must_use]
    pub const fn session(&self) -> &'s Session<D> {
        self.session
    }

    /// The bounding element
    #[must_use]
    pub const fn root(&self) -> &D::Element {
        &self.root
    }

    /// Presence/visibility capability for this region's session
    #[must_use]
    pub const fn base(&self) -> PageBase<'s, D> {
        PageBase::new(self.session)
    }

    /// Find the first element under the root matching `locator`
    pub fn find(&self, locator: &Locator) -> PageResult<D::Element> {
        self.root.find(locator)
    }

    /// Find every element under the root matching `locator`
    pub fn find_all(&self, locator: &Locator) -> PageResult<Vec<D::Element>> {
        self.root.find_all(locator)
    }

    /// Text of the first element under the root matching `locator`
    pub fn text_of(&self, locator: &Locator) -> PageResult<String> {
        self.find(locator)?.text()
    }

    /// Text of the bounding element itself
    pub fn text(&self) -> PageResult<String> {
        self.root.text()
    }

    /// Whether the element matching `locator` under the root is displayed
    pub fn is_visible(&self, locator: &Locator) -> PageResult<bool> {
        self.base().is_element_visible(Some(&self.root), locator)
    }

    /// Click the element matching `locator` under the root
    pub fn click(&self, locator: &Locator) -> PageResult<()> {
        self.find(locator)?.click()
    }
}

/// Pick the `index`-th element, reporting a miss as [`PageError::NotFound`]
pub(crate) fn nth<T>(mut items: Vec<T>, index: usize, what: &str) -> PageResult<T> {
    let len = items.len();
    if index < len {
        Ok(items.swap_remove(index))
    } else {
        Err(PageError::index_out_of_range(what, index, len))
    }
}
