use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

/// Where a scenario ran.
pub const LOGIC_TARGET: &str = "logic";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `logic` or the browser label.
    pub target: String,
    pub passed: bool,
    pub checks_run: usize,
    pub checks_passed: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    /// Record a browser run, which counts as a single check.
    pub fn browser(
        scenario_name: &str,
        browser: &str,
        outcome: &anyhow::Result<()>,
        duration: Duration,
    ) -> Self {
        let failures = match outcome {
            Ok(()) => Vec::new(),
            Err(e) => vec![format!("{e:#}")],
        };
        Self {
            scenario_name: scenario_name.to_string(),
            target: browser.to_string(),
            passed: failures.is_empty(),
            checks_run: 1,
            checks_passed: usize::from(failures.is_empty()),
            failures,
            duration,
        }
    }
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({} checks)",
                scenario.name.bright_white(),
                scenario.checks.len()
            );
        }

        let started = Instant::now();
        let mut failures = Vec::new();
        for check in &scenario.checks {
            let check_start = Instant::now();
            match (check.run)() {
                Ok(()) => {
                    if self.verbose {
                        println!("  ✅ {} ({:?})", check.label, check_start.elapsed());
                    }
                }
                Err(e) => {
                    let message = format!("{}: {e:#}", check.label);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    log::debug!("{} failed: {e:?}", check.label);
                    failures.push(message);
                }
            }
        }

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            target: LOGIC_TARGET.to_string(),
            passed: failures.is_empty(),
            checks_run: scenario.checks.len(),
            checks_passed: scenario.checks.len() - failures.len(),
            failures,
            duration: started.elapsed(),
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
