use anyhow::{Context, Result, ensure};
use chrono::Utc;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx, TestScenario};
use megavault_core::{AppPath, BREAKPOINTS, BlogCatalog, NAV_LINKS, page_size_for_width};

pub struct SmokeScenario;

const PAGE_ROOTS: [(&str, &str); 4] = [
    ("/login", "#login-form"),
    ("/register", "#register-form"),
    ("/forgot-password", "#forgot-password-form"),
    ("/reset-password?token=smoke", "#reset-password-form"),
];

impl SmokeScenario {
    fn checks() -> Vec<LogicCheck> {
        vec![
            LogicCheck::new("paths round-trip", paths_round_trip),
            LogicCheck::new("navigation links resolve", nav_links_resolve),
            LogicCheck::new("sample catalog renders", sample_catalog_renders),
            LogicCheck::new("breakpoints match sample widths", breakpoints_match),
        ]
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/").await?;
        for css in [".site-header", "#blog", ".site-footer"] {
            page.require(css).await?;
        }
        if ctx.verbose {
            println!("  🌐 Home page rendered header, blog and footer");
        }

        for (path, css) in PAGE_ROOTS {
            page.open(path).await?;
            page.require(css)
                .await
                .with_context(|| format!("rendering {path}"))?;
            if ctx.verbose {
                println!("  📄 {path} rendered {css}");
            }
        }

        page.open("/no-such-page").await?;
        let source = driver.source().await?;
        ensure!(
            source.contains("This page does not exist."),
            "unknown paths should render the 404 page"
        );
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", Self::checks()))
    }
}

fn paths_round_trip() -> Result<()> {
    for path in AppPath::ALL {
        let parsed = AppPath::from_path(path.path());
        ensure!(parsed == path, "{} parsed as {parsed:?}", path.path());
    }
    ensure!(
        AppPath::from_path("/blog/1") == AppPath::NotFound,
        "unknown paths should map to the 404 page"
    );
    Ok(())
}

fn nav_links_resolve() -> Result<()> {
    for link in NAV_LINKS {
        if link.is_anchor() {
            ensure!(link.href == "#blog", "{} points at {}", link.title, link.href);
        } else {
            ensure!(
                AppPath::from_path(link.href) != AppPath::NotFound,
                "{} links to unknown path {}",
                link.title,
                link.href
            );
        }
    }
    Ok(())
}

fn sample_catalog_renders() -> Result<()> {
    let catalog = BlogCatalog::sample(Utc::now().date_naive());
    ensure!(!catalog.is_empty(), "sample catalog is empty");
    for post in &catalog.posts {
        ensure!(post.excerpt().ends_with("..."), "{} excerpt", post.title);
        ensure!(post.display_date().len() == 10, "{} date", post.title);
    }
    let json = serde_json::to_string(&catalog)?;
    let parsed = BlogCatalog::from_json(&json).context("re-reading sample catalog")?;
    ensure!(parsed == catalog, "catalog changed through JSON");
    Ok(())
}

fn breakpoints_match() -> Result<()> {
    for bp in BREAKPOINTS {
        let size = page_size_for_width(f64::from(bp.sample_width));
        ensure!(
            size == bp.page_size,
            "{} at {}px gave {size} cards",
            bp.name,
            bp.sample_width
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_scenario_exposes_logic_checks() {
        let logic = SmokeScenario.as_logic_scenario().expect("logic scenario");
        assert_eq!(logic.name, "Smoke Test");
        assert_eq!(logic.checks.len(), 4);
    }

    #[test]
    fn smoke_checks_pass_against_core() {
        for check in SmokeScenario::checks() {
            (check.run)().unwrap_or_else(|e| panic!("{}: {e:#}", check.label));
        }
    }
}
