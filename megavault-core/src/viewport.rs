//! Responsive breakpoints for the blog grid.

/// Width band mapped to a number of blog cards per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub page_size: usize,
    /// A width inside the band, used when driving a real browser window.
    pub sample_width: u32,
}

/// `width <= 500`
pub const COMPACT: Breakpoint = Breakpoint {
    name: "compact",
    page_size: 1,
    sample_width: 420,
};
/// `500 < width < 1024`
pub const MEDIUM: Breakpoint = Breakpoint {
    name: "medium",
    page_size: 2,
    sample_width: 800,
};
/// `width >= 1024`
pub const WIDE: Breakpoint = Breakpoint {
    name: "wide",
    page_size: 3,
    sample_width: 1280,
};

/// Ordered breakpoints used for page size decisions.
pub const BREAKPOINTS: [Breakpoint; 3] = [COMPACT, MEDIUM, WIDE];

/// Breakpoint for a viewport `width` in CSS pixels.
#[must_use]
pub fn for_width(width: f64) -> Breakpoint {
    if width <= 500.0 {
        COMPACT
    } else if width < 1024.0 {
        MEDIUM
    } else {
        WIDE
    }
}

/// Blog cards per page at `width`.
#[must_use]
pub fn page_size_for_width(width: f64) -> usize {
    for_width(width).page_size
}
