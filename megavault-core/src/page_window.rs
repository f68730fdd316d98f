//! Sliding window of page-number buttons.

use std::ops::RangeInclusive;

/// Maximum number of page buttons shown at once.
pub const WINDOW_WIDTH: usize = 3;

/// Half-open index range into the page sequence `1..=total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-based page numbers covered by the window.
    #[must_use]
    pub fn pages(&self) -> RangeInclusive<usize> {
        if self.is_empty() {
            return 1..=0;
        }
        (self.start + 1)..=self.end
    }
}

/// Window centred on `current`, clamped to `[0, total]`.
///
/// Page 1 shows the first three buttons; any other page shows its
/// predecessor, itself and its successor.
#[must_use]
pub const fn page_window(current: usize, total: usize) -> PageWindow {
    let (start, end) = if current <= 1 {
        (0, WINDOW_WIDTH)
    } else {
        (current - 2, current.saturating_add(1))
    };
    let end = if end > total { total } else { end };
    let start = if start > end { end } else { start };
    PageWindow { start, end }
}

/// Pull `current` back inside the page range after the total shrinks.
///
/// A zero total leaves the page untouched since no page is valid.
#[must_use]
pub const fn clamp_current_page(current: usize, total: usize) -> usize {
    if total != 0 && current > total {
        total
    } else {
        current
    }
}
