use colored::Colorize;
use std::io::Write;
use std::time::Duration;
use thiserror::Error;

use super::ScenarioResult;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

struct Tally {
    total: usize,
    passed: usize,
}

impl Tally {
    fn of(results: &[ScenarioResult]) -> Self {
        Self {
            total: results.len(),
            passed: results.iter().filter(|r| r.passed).count(),
        }
    }

    const fn failed(&self) -> usize {
        self.total - self.passed
    }

    #[allow(clippy::cast_precision_loss)]
    fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<(), ReportError> {
    let tally = Tally::of(results);

    writeln!(out)?;
    writeln!(out, "{}", "📊 Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;
    writeln!(out, "Total scenarios: {}", tally.total)?;
    writeln!(out, "Passed: {}", tally.passed.to_string().green())?;
    writeln!(out, "Failed: {}", tally.failed().to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", tally.success_rate())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(
            out,
            "{} {} [{}]",
            status,
            result.scenario_name.bold(),
            result.target
        )?;
        writeln!(
            out,
            "   Checks: {}/{} passed",
            result.checks_passed, result.checks_run
        )?;
        writeln!(out, "   Time: {:?}", result.duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    let fastest = results.iter().min_by_key(|r| r.duration);
    let slowest = results.iter().max_by_key(|r| r.duration);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
) -> Result<(), ReportError> {
    let tally = Tally::of(results);

    writeln!(out, "# MegaVault Test Results\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {}", tally.total)?;
    writeln!(out, "- **Passed**: {}", tally.passed)?;
    writeln!(out, "- **Failed**: {}", tally.failed())?;
    writeln!(out, "- **Success rate**: {:.1}%\n", tally.success_rate())?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };

        writeln!(
            out,
            "### {} {} ({})\n",
            status, result.scenario_name, result.target
        )?;
        writeln!(
            out,
            "- **Checks**: {}/{} passed",
            result.checks_passed, result.checks_run
        )?;
        writeln!(out, "- **Time**: {:?}", result.duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
