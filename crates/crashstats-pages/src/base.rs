//! Shared page queries.
//!
//! [`PageBase`] is the capability every page and region composes: presence,
//! visibility and alert checks. These are pure queries. A missing element
//! yields `false`; deeper driver failures propagate.

use crate::driver::{Driver, Element};
use crate::locator::Locator;
use crate::result::{found, PageResult};
use crate::session::Session;

/// Presence, visibility and alert checks bound to one session
#[derive(Debug)]
pub struct PageBase<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<D: Driver> Clone for PageBase<'_, D> {
    fn clone(&self) -> Self {
        Self {
            session: self.session,
        }
    }
}

impl<'s, D: Driver> PageBase<'s, D> {
    /// Create the capability for a session
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }

    /// The session this capability queries
    #[must_use]
    pub const fn session(&self) -> &'s Session<D> {
        self.session
    }

    /// Whether at least one element in the document matches `locator`
    pub fn is_element_present(&self, locator: &Locator) -> PageResult<bool> {
        Ok(found(self.session.driver().find(locator))?.is_some())
    }

    /// Whether the element matching `locator` is displayed.
    ///
    /// With a `scope`, the lookup is relative to that element; otherwise it
    /// covers the whole document.
    pub fn is_element_visible(
        &self,
        scope: Option<&D::Element>,
        locator: &Locator,
    ) -> PageResult<bool> {
        let element = match scope {
            Some(root) => found(root.find(locator))?,
            None => found(self.session.driver().find(locator))?,
        };
        match element {
            Some(element) => element.is_displayed(),
            None => Ok(false),
        }
    }

    /// Whether a native dialog is currently open
    pub fn is_alert_present(&self) -> PageResult<bool> {
        self.session.driver().is_alert_present()
    }
}
