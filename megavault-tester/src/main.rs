mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, SitePage, new_session};
use common::scenario::{ScenarioCtx, get_scenario, list_scenarios, scenario_keys};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Check the site logic directly (fast, no browser)
    Logic,
    /// Drive a running build through WebDriver
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "megavault-tester", version)]
#[command(about = "Automated QA for the MegaVault site - pure logic checks and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (real rendering), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the running site, including any path prefix
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and page dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);

    let mut all_results = run_logic_scenarios(&args, &scenarios);
    all_results.extend(run_browser_scenarios(&args, &scenarios).await);

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🔐 MegaVault Automated Tester".bright_cyan().bold());
    println!("{}", "=============================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s.eq_ignore_ascii_case("all")) {
        scenarios.retain(|s| !s.eq_ignore_ascii_case("all"));
        for key in scenario_keys() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    }
}

fn scenario_artifacts_dir(args: &Args, kind: BrowserKind, scenario: &str) -> String {
    artifacts_dir(&args.artifacts_dir, &kind.label(), scenario)
}

fn run_logic_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results: Vec<ScenarioResult> = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);

    for scenario_name in scenarios {
        if let Some(combined_scenario) = get_scenario(scenario_name) {
            if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
                results.push(logic_tester.run_scenario(&logic_scenario));
            } else {
                eprintln!(
                    "⚠️  Scenario {} has no logic test implementation",
                    scenario_name.yellow()
                );
            }
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }

    results
}

async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let started = Instant::now();
        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                let outcome = Err(anyhow::Error::new(e).context("starting WebDriver session"));
                results.push(ScenarioResult::browser(
                    "Browser Session",
                    &kind.label(),
                    &outcome,
                    started.elapsed(),
                ));
                continue;
            }
        };

        let page = SitePage::new(&driver, &args.base_url, cfg.window_height);
        results.extend(
            run_browser_scenarios_for_driver(args, scenarios, kind, &driver, &page).await,
        );
        let _ = driver.quit().await;
    }

    results
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
    page: &SitePage<'_>,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    let label = kind.label();

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        let ctx = ScenarioCtx {
            page: page.clone(),
            verbose: args.verbose,
        };

        let scenario_start = Instant::now();
        let outcome = scenario.run_browser(driver, &ctx).await;
        let duration = scenario_start.elapsed();
        match &outcome {
            Ok(()) => {
                println!("✅ [{}] {} - {:?}", label.green(), scenario_name, duration);
            }
            Err(e) => {
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    duration,
                    e
                );
                let dir = scenario_artifacts_dir(args, kind, scenario_name);
                if let Err(capture_err) = capture_artifacts(driver, page, &dir, e).await {
                    log::warn!("could not save artifacts to {dir}: {capture_err:#}");
                }
            }
        }
        results.push(ScenarioResult::browser(scenario_name, &label, &outcome, duration));
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            logic::reports::generate_json_report(&mut output_target, results)?;
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# MegaVault Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != "json" {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            report: "json".to_string(),
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("megavault-{}-{name}", std::process::id()))
    }

    fn sample_result(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Smoke Test".to_string(),
            target: "logic".to_string(),
            passed,
            checks_run: 4,
            checks_passed: if passed { 4 } else { 3 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["failure".to_string()]
            },
            duration: Duration::from_millis(10),
        }
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let expanded = expand_scenarios("all,smoke");
        assert_eq!(expanded, vec!["smoke", "pagination", "register", "tokens"]);
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let expanded = expand_scenarios("tokens,smoke");
        assert_eq!(expanded, vec!["tokens".to_string(), "smoke".to_string()]);
    }

    #[test]
    fn run_logic_scenarios_skips_when_not_enabled() {
        let args = Args {
            mode: TestMode::Browser,
            ..base_args()
        };
        assert!(run_logic_scenarios(&args, &["smoke".to_string()]).is_empty());
    }

    #[test]
    fn run_logic_scenarios_passes_every_scenario() {
        let args = base_args();
        let results = run_logic_scenarios(&args, &expand_scenarios("all"));
        assert_eq!(results.len(), 4);
        for result in &results {
            assert!(
                result.passed,
                "{}: {:?}",
                result.scenario_name,
                result.failures
            );
        }
    }

    #[test]
    fn run_logic_scenarios_skips_unknown_names() {
        let args = base_args();
        let results = run_logic_scenarios(&args, &["nope".to_string(), "tokens".to_string()]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].scenario_name, "Token Gate Test");
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let temp = temp_file("scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("pagination"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        let args = base_args();
        assert!(!maybe_list_scenarios(&args).unwrap());
    }

    #[test]
    fn write_reports_emits_json_for_empty_results() {
        let temp = temp_file("empty.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn write_reports_emits_json_for_results() {
        let temp = temp_file("full.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(true)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["scenario_name"], "Smoke Test");
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = temp_file("empty.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("No scenarios executed"));
    }

    #[test]
    fn write_reports_emits_console_report() {
        let temp = temp_file("console.txt");
        let args = Args {
            report: "console".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(false)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Smoke Test"));
        assert!(content.contains("Total time"));
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::new(None).unwrap();
        target.write_all(b"ok").unwrap();
        target.flush().unwrap();
    }

    #[test]
    fn build_browser_config_respects_headless_and_hub() {
        let mut args = base_args();
        args.headless = HeadlessMode::Windowed;
        args.hub = Some("http://remote.example".to_string());
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://remote.example"));
        assert_eq!(
            cfg.implicit_wait_secs,
            BrowserConfig::default().implicit_wait_secs
        );
    }

    #[test]
    fn scenario_artifacts_dir_includes_browser_and_scenario() {
        let args = base_args();
        let dir = scenario_artifacts_dir(&args, BrowserKind::Firefox, "pagination");
        assert!(dir.starts_with("target/test-artifacts/firefox/pagination/"));
    }

    #[tokio::test]
    async fn run_browser_scenarios_skips_when_not_enabled() {
        let args = base_args();
        let results = run_browser_scenarios(&args, &["smoke".to_string()]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn run_browser_scenarios_ignores_unknown_browser() {
        let args = Args {
            mode: TestMode::Browser,
            browsers: "unknown".to_string(),
            ..base_args()
        };
        let results = run_browser_scenarios(&args, &["smoke".to_string()]).await;
        assert!(results.is_empty());
    }
}
