use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

use crate::browser::{PageSnapshot, SitePage};

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Save what the browser showed when a scenario failed.
pub async fn capture_artifacts(
    driver: &WebDriver,
    page: &SitePage<'_>,
    dir: &str,
    err: &anyhow::Error,
) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let snapshot = page.snapshot().await.ok();
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        snapshot.as_ref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    snapshot: Option<&PageSnapshot>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }

    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }

    if let Some(snapshot) = snapshot {
        let payload = serde_json::to_vec_pretty(snapshot).unwrap_or_default();
        let _ = fs::write(dir.join("page.json"), payload);
    }

    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,pagination,  tokens ");
        assert_eq!(parts, vec!["smoke", "pagination", "tokens"]);
    }

    #[test]
    fn artifacts_dir_includes_key_segments() {
        let dir = artifacts_dir("target/out", "chrome", "pagination");
        assert!(dir.starts_with("target/out/chrome/pagination/"));
    }

    #[test]
    fn write_artifact_files_writes_expected_payloads() {
        let base = std::env::temp_dir().join(format!(
            "megavault-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let snapshot = PageSnapshot {
            path: "/".to_string(),
            cards: 2,
            page_buttons: 3,
            ..PageSnapshot::default()
        };
        write_artifact_files(
            &base,
            Some(&[1, 2, 3]),
            Some("<html />"),
            Some(&snapshot),
            "boom",
        )
        .expect("write artifacts");

        assert!(base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        let page = std::fs::read_to_string(base.join("page.json")).expect("page.json");
        assert!(page.contains("\"pageButtons\": 3"));
        assert_eq!(
            std::fs::read_to_string(base.join("error.txt")).expect("error.txt"),
            "boom"
        );
    }
}
