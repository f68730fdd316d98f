use anyhow::{Result, ensure};
use chrono::Utc;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx, TestScenario};
use megavault_core::{
    BREAKPOINTS, BlogCatalog, PaginationAction, PaginationState, Rounding, WINDOW_WIDTH,
    clamp_current_page, page_bounds, page_size_for_width, page_window, total_pages,
};

/// Largest list length swept per breakpoint.
const MAX_ITEMS: usize = 12;

pub struct PaginationScenario;

impl PaginationScenario {
    fn checks() -> Vec<LogicCheck> {
        vec![
            LogicCheck::new("every page of every list size", sweep_breakpoints),
            LogicCheck::new("page size change resets", page_size_change_resets),
            LogicCheck::new("rounding policies on short tails", rounding_policies),
            LogicCheck::new("stale page clamps", stale_page_clamps),
        ]
    }
}

/// Page 1 as the home page shows it for `items` posts at `page_size`.
fn first_page(items: usize, page_size: usize) -> PaginationState {
    PaginationState::new(page_size, Rounding::Nearest).apply(PaginationAction::ItemsLoaded(items))
}

#[async_trait::async_trait]
impl BrowserScenario for PaginationScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        let items = BlogCatalog::sample(Utc::now().date_naive()).len();

        for bp in BREAKPOINTS {
            page.resize(bp.sample_width).await?;
            page.open("/").await?;
            let snapshot = page.snapshot().await?;
            // Window chrome eats into the outer width, so judge by the viewport.
            let page_size = page_size_for_width(snapshot.inner_width);
            let state = first_page(items, page_size);
            let window = page_window(state.current_page, state.total_pages);

            if ctx.verbose {
                println!(
                    "  📐 {} ({}px window, {}px viewport): {} cards, {} buttons",
                    bp.name,
                    bp.sample_width,
                    snapshot.inner_width,
                    snapshot.cards,
                    snapshot.page_buttons
                );
            }
            ensure!(
                snapshot.cards == state.visible_range().len(),
                "{}: expected {} cards, saw {}",
                bp.name,
                state.visible_range().len(),
                snapshot.cards
            );
            ensure!(
                snapshot.page_buttons == window.len(),
                "{}: expected {} page buttons, saw {}",
                bp.name,
                window.len(),
                snapshot.page_buttons
            );

            if state.total_pages > 1 {
                page.click(".blog-pagination [aria-label='Page 2']").await?;
                let after = page.snapshot().await?;
                let second = state.apply(PaginationAction::RequestPage(2));
                ensure!(
                    after.cards == second.visible_range().len(),
                    "{}: page 2 should show {} cards, saw {}",
                    bp.name,
                    second.visible_range().len(),
                    after.cards
                );
            }
        }
        Ok(())
    }
}

impl CombinedScenario for PaginationScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Pagination Test", Self::checks()))
    }
}

fn sweep_breakpoints() -> Result<()> {
    for bp in BREAKPOINTS {
        for items in 0..=MAX_ITEMS {
            check_list(bp.page_size, items)?;
        }
    }
    Ok(())
}

fn check_list(page_size: usize, items: usize) -> Result<()> {
    let state = first_page(items, page_size);
    let expected_total = total_pages(items, page_size, Rounding::Nearest);
    ensure!(
        state.total_pages == expected_total && state.current_page == 1,
        "{items} items at {page_size}/page: {state:?}"
    );

    let mut shown = 0;
    for page in 1..=state.total_pages {
        let current = state.apply(PaginationAction::RequestPage(page));
        ensure!(current.current_page == page, "page {page} was not selectable");
        let range = current.visible_range();
        ensure!(
            range == page_bounds(page, page_size, items),
            "{items} items, page {page}: visible {range:?}"
        );
        ensure!(range.len() <= page_size, "page {page} overflows");
        shown += range.len();

        let window = page_window(page, state.total_pages);
        ensure!(
            window.len() <= WINDOW_WIDTH && window.pages().contains(&page),
            "window {window:?} for page {page} of {}",
            state.total_pages
        );
        ensure!(
            window.end <= state.total_pages,
            "window {window:?} runs past page {}",
            state.total_pages
        );
    }
    ensure!(
        shown + state.unreachable_items() == items,
        "{items} items at {page_size}/page: {shown} shown, {} unreachable",
        state.unreachable_items()
    );

    for out_of_range in [0, state.total_pages + 1] {
        let ignored = state.apply(PaginationAction::RequestPage(out_of_range));
        ensure!(ignored == state, "page {out_of_range} should be ignored");
    }
    Ok(())
}

fn page_size_change_resets() -> Result<()> {
    let state = first_page(12, 1).apply(PaginationAction::RequestPage(7));
    ensure!(state.current_page == 7, "page 7 of 12 should be selectable");
    let resized = state.apply(PaginationAction::PageSizeChanged(3));
    ensure!(
        resized.current_page == 1 && resized.total_pages == 4,
        "resize to 3/page gave {resized:?}"
    );
    let same = resized.apply(PaginationAction::PageSizeChanged(3));
    ensure!(same == resized, "unchanged page size should be a no-op");
    Ok(())
}

fn rounding_policies() -> Result<()> {
    let nearest = first_page(4, 3);
    ensure!(
        nearest.total_pages == 1 && nearest.unreachable_items() == 1,
        "nearest rounding on 4 items: {nearest:?}"
    );
    let ceiling = PaginationState::new(3, Rounding::Ceiling)
        .apply(PaginationAction::ItemsLoaded(4));
    ensure!(
        ceiling.total_pages == 2 && ceiling.unreachable_items() == 0,
        "ceiling rounding on 4 items: {ceiling:?}"
    );

    let lone = first_page(1, 3);
    ensure!(
        lone.total_pages == 0 && lone.visible_range().is_empty(),
        "a single post at 3/page rounds to no pages: {lone:?}"
    );
    Ok(())
}

fn stale_page_clamps() -> Result<()> {
    ensure!(clamp_current_page(5, 3) == 3, "page 5 of 3 should clamp");
    ensure!(clamp_current_page(2, 3) == 2, "page 2 of 3 should stay");
    ensure!(clamp_current_page(5, 0) == 5, "empty lists leave the page alone");
    Ok(())
}
