//! Top changers page.

use crate::driver::Driver;
use crate::page::{Page, PageKind};
use crate::session::Session;

/// Signatures whose crash volume changed most
#[derive(Debug)]
pub struct TopChangersPage<'s, D: Driver> {
    session: &'s Session<D>,
}

impl<'s, D: Driver> Page<'s, D> for TopChangersPage<'s, D> {
    const KIND: PageKind = PageKind::TopChangers;

    fn session(&self) -> &'s Session<D> {
        self.session
    }
}

impl<'s, D: Driver> TopChangersPage<'s, D> {
    /// Bind to the top changers page already on screen
    #[must_use]
    pub const fn new(session: &'s Session<D>) -> Self {
        Self { session }
    }
}
