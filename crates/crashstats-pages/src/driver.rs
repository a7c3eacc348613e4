//! Driver collaborator traits.
//!
//! Page objects never talk to a concrete browser engine. They depend on the
//! [`Driver`] and [`Element`] traits below, which a WebDriver binding (or the
//! in-memory [`MockDriver`](crate::mock::MockDriver)) implements.
//!
//! # Contract
//!
//! - Every call blocks until the browser responds or the driver's own
//!   timeout elapses.
//! - `find` reports a missing element as [`PageError::NotFound`]; any other
//!   failure (stale reference, dead session) is a [`PageError::Driver`].
//! - Element lookups through [`Element::find`] are relative to that element.
//!
//! [`PageError::NotFound`]: crate::result::PageError::NotFound
//! [`PageError::Driver`]: crate::result::PageError::Driver

use crate::locator::Locator;
use crate::result::PageResult;
use std::fmt::Debug;

/// Handle to one DOM element owned by the live browser session.
pub trait Element: Sized + Debug {
    /// Find the first descendant matching `locator`
    fn find(&self, locator: &Locator) -> PageResult<Self>;

    /// Find every descendant matching `locator`, in document order
    fn find_all(&self, locator: &Locator) -> PageResult<Vec<Self>>;

    /// Click the element
    fn click(&self) -> PageResult<()>;

    /// Visible text of the element
    fn text(&self) -> PageResult<String>;

    /// Attribute value, `None` when the attribute is absent
    fn attribute(&self, name: &str) -> PageResult<Option<String>>;

    /// Whether the element is rendered and visible
    fn is_displayed(&self) -> PageResult<bool>;

    /// Whether an `<option>`, checkbox or radio input is selected
    fn is_selected(&self) -> PageResult<bool>;

    /// Clear a text input
    fn clear(&self) -> PageResult<()>;

    /// Type text into the element
    fn send_keys(&self, text: &str) -> PageResult<()>;
}

/// Abstract browser automation driver.
///
/// One driver value backs exactly one live browser session.
pub trait Driver {
    /// Element handle type produced by this driver
    type Element: Element;

    /// Load `url` in the current window
    fn navigate(&self, url: &str) -> PageResult<()>;

    /// Find the first element in the document matching `locator`
    fn find(&self, locator: &Locator) -> PageResult<Self::Element>;

    /// Find every element in the document matching `locator`
    fn find_all(&self, locator: &Locator) -> PageResult<Vec<Self::Element>>;

    /// Execute a script in the page and return its JSON value
    fn execute_script(&self, script: &str) -> PageResult<serde_json::Value>;

    /// Whether a native dialog is open; must not accept or dismiss it
    fn is_alert_present(&self) -> PageResult<bool>;
}
