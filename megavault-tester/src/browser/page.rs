use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thirtyfour::prelude::*;

const SNAPSHOT_SCRIPT: &str = r"
const form = document.querySelector('#register-form');
return {
  path: window.location.pathname,
  search: window.location.search,
  innerWidth: window.innerWidth,
  cards: document.querySelectorAll('.blog-card').length,
  pageButtons: document.querySelectorAll('.blog-pagination button').length,
  step: form ? form.getAttribute('data-step') : null,
};
";

/// What the rendered site currently shows, read in one script call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub path: String,
    pub search: String,
    pub inner_width: f64,
    pub cards: usize,
    pub page_buttons: usize,
    pub step: Option<String>,
}

/// Thin helpers over a WebDriver session pointed at one deployment.
#[derive(Debug, Clone)]
pub struct SitePage<'a> {
    driver: &'a WebDriver,
    base_url: String,
    window_height: u32,
}

impl<'a> SitePage<'a> {
    pub fn new(driver: &'a WebDriver, base_url: &str, window_height: u32) -> Self {
        Self {
            driver,
            base_url: base_url.trim_end_matches('/').to_string(),
            window_height,
        }
    }

    /// Absolute URL for an app path such as `/login?token=x`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("navigating to {url}"))?;
        self.settle().await;
        Ok(())
    }

    /// Resize the outer window and give the app a moment to react.
    pub async fn resize(&self, width: u32) -> Result<()> {
        self.driver
            .set_window_rect(0, 0, width, self.window_height)
            .await
            .with_context(|| format!("resizing window to {width}px"))?;
        self.settle().await;
        Ok(())
    }

    pub async fn snapshot(&self) -> Result<PageSnapshot> {
        let ret = self.driver.execute(SNAPSHOT_SCRIPT, vec![]).await?;
        serde_json::from_value(ret.json().clone()).context("parsing page snapshot")
    }

    pub async fn require(&self, css: &str) -> Result<WebElement> {
        self.driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("expected `{css}` on the page"))
    }

    /// Type into the form input registered under `name`.
    pub async fn fill(&self, name: &str, text: &str) -> Result<()> {
        let input = self.require(&format!("#input-{name}")).await?;
        input.clear().await?;
        input.send_keys(text).await?;
        Ok(())
    }

    pub async fn click(&self, css: &str) -> Result<()> {
        self.require(css).await?.click().await?;
        self.settle().await;
        Ok(())
    }

    async fn settle(&self) {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
}
