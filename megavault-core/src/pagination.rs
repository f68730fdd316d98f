//! Blog list pagination.
//!
//! The landing page owns one [`PaginationState`] and feeds it discrete
//! actions (list loaded, page size changed, page requested). Visible items
//! are always derived from the state, never stored alongside it.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How the total page count is derived from item count and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round `count / size` to the nearest integer, halves rounding up.
    ///
    /// Trailing items are unreachable whenever the remainder is less than
    /// half a page (4 items at size 3 yields a single page).
    #[default]
    Nearest,
    /// Conventional ceiling division; every item is reachable.
    Ceiling,
}

/// Total number of pages for `item_count` items at `page_size` per page.
///
/// A zero page size is treated as one. Empty lists always have zero pages.
#[must_use]
pub const fn total_pages(item_count: usize, page_size: usize, rounding: Rounding) -> usize {
    if item_count == 0 {
        return 0;
    }
    let size = if page_size == 0 { 1 } else { page_size };
    match rounding {
        Rounding::Nearest => {
            let whole = item_count / size;
            let rem = item_count % size;
            if rem >= size - rem { whole + 1 } else { whole }
        }
        Rounding::Ceiling => item_count.div_ceil(size),
    }
}

/// Index range of the items on 1-based `page`, clamped to `len`.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Items shown on 1-based `page`.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(page, page_size, items.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    /// The source list was replaced with one of this length.
    ItemsLoaded(usize),
    /// The viewport produced a new page size.
    PageSizeChanged(usize),
    /// The user asked for a 1-based page.
    RequestPage(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub item_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub rounding: Rounding,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(3, Rounding::default())
    }
}

impl PaginationState {
    #[must_use]
    pub const fn new(page_size: usize, rounding: Rounding) -> Self {
        Self {
            item_count: 0,
            page_size: if page_size == 0 { 1 } else { page_size },
            current_page: 1,
            total_pages: 0,
            rounding,
        }
    }

    /// Apply one action and return the next state.
    ///
    /// Loading a list or changing the page size recomputes the page count and
    /// resets to page 1. Page requests outside `1..=total_pages` are ignored.
    #[must_use]
    pub fn apply(self, action: PaginationAction) -> Self {
        match action {
            PaginationAction::ItemsLoaded(count) => Self {
                item_count: count,
                ..self
            }
            .reset(),
            PaginationAction::PageSizeChanged(size) => {
                let size = size.max(1);
                if size == self.page_size {
                    return self;
                }
                Self {
                    page_size: size,
                    ..self
                }
                .reset()
            }
            PaginationAction::RequestPage(page) => {
                if page == 0 || page > self.total_pages {
                    log::debug!("ignoring page request {page} (total {})", self.total_pages);
                    return self;
                }
                Self {
                    current_page: page,
                    ..self
                }
            }
        }
    }

    const fn reset(self) -> Self {
        Self {
            total_pages: total_pages(self.item_count, self.page_size, self.rounding),
            current_page: 1,
            ..self
        }
    }

    /// Index range of the visible items.
    ///
    /// Empty while the current page lies outside `1..=total_pages`, which
    /// happens when rounding yields zero pages for a short list.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        if self.current_page == 0 || self.current_page > self.total_pages {
            return 0..0;
        }
        page_bounds(self.current_page, self.page_size, self.item_count)
    }

    /// Visible slice of `items`. `items` should be the list whose length was
    /// last loaded; a shorter slice is clamped rather than indexed past.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Number of trailing items that no page can show.
    #[must_use]
    pub const fn unreachable_items(&self) -> usize {
        self.item_count
            .saturating_sub(self.total_pages.saturating_mul(self.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(count: usize, size: usize) -> PaginationState {
        PaginationState::new(size, Rounding::Nearest).apply(PaginationAction::ItemsLoaded(count))
    }

    #[test]
    fn nearest_rounding_matches_observed_counts() {
        assert_eq!(total_pages(0, 3, Rounding::Nearest), 0);
        assert_eq!(total_pages(5, 3, Rounding::Nearest), 2);
        assert_eq!(total_pages(4, 3, Rounding::Nearest), 1);
        assert_eq!(total_pages(3, 2, Rounding::Nearest), 2);
        assert_eq!(total_pages(1, 2, Rounding::Nearest), 1);
        assert_eq!(total_pages(1, 3, Rounding::Nearest), 0);
        assert_eq!(total_pages(5, 1, Rounding::Nearest), 5);
        assert_eq!(total_pages(7, 0, Rounding::Nearest), 7);
    }

    #[test]
    fn ceiling_rounding_reaches_every_item() {
        assert_eq!(total_pages(4, 3, Rounding::Ceiling), 2);
        assert_eq!(total_pages(1, 3, Rounding::Ceiling), 1);
        assert_eq!(total_pages(0, 3, Rounding::Ceiling), 0);
        let state =
            PaginationState::new(3, Rounding::Ceiling).apply(PaginationAction::ItemsLoaded(4));
        assert_eq!(state.unreachable_items(), 0);
    }

    #[test]
    fn nearest_total_matches_float_rounding_for_small_lists() {
        for size in 1..=3_usize {
            for count in 0..=40_usize {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss
                )]
                let expected = (count as f64 / size as f64).round() as usize;
                assert_eq!(
                    total_pages(count, size, Rounding::Nearest),
                    expected,
                    "count {count} size {size}"
                );
            }
        }
    }

    #[test]
    fn nearest_rounding_does_not_overflow_huge_counts() {
        let count = usize::MAX / 2 + 1;
        assert_eq!(total_pages(count, 3, Rounding::Nearest), count / 3 + 1);
        assert_eq!(total_pages(usize::MAX, 1, Rounding::Nearest), usize::MAX);
        assert_eq!(total_pages(usize::MAX, usize::MAX, Rounding::Nearest), 1);
        assert_eq!(total_pages(1, usize::MAX, Rounding::Nearest), 0);
    }

    #[test]
    fn five_items_at_three_per_page_split_into_two_pages() {
        let items = ["a", "b", "c", "d", "e"];
        let state = loaded(items.len(), 3);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.visible(&items), &["a", "b", "c"]);
        let state = state.apply(PaginationAction::RequestPage(2));
        assert_eq!(state.visible(&items), &["d", "e"]);
    }

    #[test]
    fn fourth_item_is_unreachable_at_three_per_page() {
        let items = [1, 2, 3, 4];
        let state = loaded(items.len(), 3);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.visible(&items), &[1, 2, 3]);
        assert_eq!(state.unreachable_items(), 1);
        let state = state.apply(PaginationAction::RequestPage(2));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn out_of_range_requests_are_ignored() {
        let state = loaded(6, 2).apply(PaginationAction::RequestPage(2));
        assert_eq!(state.current_page, 2);
        assert_eq!(state.apply(PaginationAction::RequestPage(0)), state);
        assert_eq!(state.apply(PaginationAction::RequestPage(4)), state);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let state = loaded(9, 1).apply(PaginationAction::RequestPage(7));
        assert_eq!(state.current_page, 7);
        let state = state.apply(PaginationAction::PageSizeChanged(3));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.page_size, 3);
    }

    #[test]
    fn unchanged_page_size_keeps_current_page() {
        let state = loaded(9, 3).apply(PaginationAction::RequestPage(3));
        let same = state.apply(PaginationAction::PageSizeChanged(3));
        assert_eq!(same.current_page, 3);
    }

    #[test]
    fn reloading_items_resets_to_first_page() {
        let state = loaded(9, 3).apply(PaginationAction::RequestPage(2));
        let state = state.apply(PaginationAction::ItemsLoaded(12));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 4);
    }

    #[test]
    fn empty_list_has_no_pages_and_no_items() {
        let state = loaded(0, 2);
        assert_eq!(state.total_pages, 0);
        assert!(state.visible::<u8>(&[]).is_empty());
        assert_eq!(state.apply(PaginationAction::RequestPage(1)), state);
    }

    #[test]
    fn single_item_at_three_per_page_shows_nothing() {
        let state = loaded(1, 3);
        assert_eq!(state.total_pages, 0);
        assert!(state.visible(&["only"]).is_empty());
        assert_eq!(state.unreachable_items(), 1);
    }

    #[test]
    fn slices_never_exceed_page_size() {
        let items: Vec<usize> = (0..11).collect();
        for size in 1..=3 {
            let mut state = loaded(items.len(), size);
            for page in 1..=state.total_pages {
                state = state.apply(PaginationAction::RequestPage(page));
                let shown = state.visible(&items);
                assert!(shown.len() <= size);
                let start = (page - 1) * size;
                assert_eq!(shown, &items[start..(page * size).min(items.len())]);
            }
        }
    }

    #[test]
    fn page_bounds_clamp_to_length() {
        assert_eq!(page_bounds(2, 3, 4), 3..4);
        assert_eq!(page_bounds(5, 3, 4), 4..4);
        assert_eq!(page_bounds(0, 3, 4), 0..0);
        assert_eq!(page_slice(&[1, 2, 3, 4], 2, 3), &[4]);
    }

    #[test]
    fn visible_clamps_to_shorter_slice() {
        let state = loaded(6, 3).apply(PaginationAction::RequestPage(2));
        assert_eq!(state.visible(&[1, 2, 3, 4]), &[4]);
    }
}
