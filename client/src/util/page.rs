//! Location of the page the widget is served from.
//!
//! The embed snippet points back at this page, so its origin and path are
//! needed. They are only known in the browser; server rendering sees `None`.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Origin and path of the hosting page, e.g. `https://host` + `/qa`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    pub origin: String,
    pub pathname: String,
}

impl PageLocation {
    pub fn new(origin: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self { origin: origin.into(), pathname: pathname.into() }
    }

    /// Origin followed by path, without any query string.
    pub fn base(&self) -> String {
        format!("{}{}", self.origin, self.pathname)
    }
}

/// Read the current `window.location`.
///
/// Returns `None` outside the browser or when the location is unreadable.
pub fn current() -> Option<PageLocation> {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window()?.location();
        let origin = location.origin().ok()?;
        let pathname = location.pathname().ok()?;
        Some(PageLocation { origin, pathname })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
