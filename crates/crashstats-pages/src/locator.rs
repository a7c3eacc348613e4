//! Locator descriptors for element lookup.
//!
//! A locator is an opaque (strategy, value) pair. Page objects build them and
//! hand them to the [`Driver`](crate::driver::Driver) untouched; only the
//! driver implementation interprets the selector syntax.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup strategy for a locator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// CSS selector (e.g., "#signatureList > tbody > tr")
    Css,
    /// Element `id` attribute
    Id,
    /// Element tag name
    TagName,
    /// Exact visible text of a link
    LinkText,
    /// XPath expression
    XPath,
}

impl Strategy {
    /// Short name used in diagnostics
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Id => "id",
            Self::TagName => "tag",
            Self::LinkText => "link",
            Self::XPath => "xpath",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (strategy, value) pair identifying zero or more elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    strategy: Strategy,
    value: String,
}

impl Locator {
    /// Create a locator from a strategy and value
    #[must_use]
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    /// Create a CSS selector locator
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Strategy::Css, selector)
    }

    /// Create an element id locator
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::new(Strategy::Id, id)
    }

    /// Create a tag name locator
    #[must_use]
    pub fn tag_name(tag: impl Into<String>) -> Self {
        Self::new(Strategy::TagName, tag)
    }

    /// Create a link text locator
    #[must_use]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::new(Strategy::LinkText, text)
    }

    /// Create an XPath locator
    #[must_use]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, expr)
    }

    /// Get the strategy
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the raw selector value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy, self.value)
    }
}
