use anyhow::Result;
use std::fmt;
use thirtyfour::prelude::*;

use crate::browser::SitePage;

pub mod pagination;
pub mod register;
pub mod smoke;
pub mod tokens;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub page: SitePage<'a>,
    pub verbose: bool,
}

/// One named assertion over `megavault-core`.
#[derive(Clone, Copy)]
pub struct LogicCheck {
    pub label: &'static str,
    pub run: fn() -> Result<()>,
}

impl LogicCheck {
    pub const fn new(label: &'static str, run: fn() -> Result<()>) -> Self {
        Self { label, run }
    }
}

impl fmt::Debug for LogicCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LogicCheck").field(&self.label).finish()
    }
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub checks: Vec<LogicCheck>,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, checks: Vec<LogicCheck>) -> Self {
        Self {
            name: name.into(),
            checks,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

const SCENARIOS: [(&str, &str); 4] = [
    ("smoke", "Smoke Test: every route renders"),
    (
        "pagination",
        "Pagination: page counts, slices and button windows per breakpoint",
    ),
    ("register", "Registration wizard: step order and validation"),
    ("tokens", "Token gate: success and reset pages"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "pagination" | "paging" => Some(Box::new(pagination::PaginationScenario)),
        "register" | "wizard" => Some(Box::new(register::RegisterScenario)),
        "tokens" | "token-gate" => Some(Box::new(tokens::TokenScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

/// Keys that `all` expands to.
pub fn scenario_keys() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|(key, _)| *key)
}
