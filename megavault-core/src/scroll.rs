//! Scroll direction tracking for the collapsing header.

/// Previous and current vertical scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTracker {
    pub previous: f64,
    pub current: f64,
}

impl ScrollTracker {
    /// Tracker primed with the offset sampled on mount.
    #[must_use]
    pub const fn at(offset: f64) -> Self {
        Self {
            previous: offset,
            current: offset,
        }
    }

    /// Record a new scroll event.
    #[must_use]
    pub const fn observe(self, offset: f64) -> Self {
        Self {
            previous: self.current,
            current: offset,
        }
    }

    #[must_use]
    pub fn is_scrolling_down(&self) -> bool {
        self.previous < self.current
    }

    /// Whether the page has left the top; the header gains a backdrop then.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.current > 0.0
    }
}

/// The header slides out while scrolling down, unless the sidebar is open.
#[must_use]
pub const fn header_hidden(scrolling_down: bool, sidebar_open: bool) -> bool {
    scrolling_down && !sidebar_open
}
