use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx, TestScenario};
use megavault_core::{AppPath, TokenDecision, TokenGate, parse_token};

const QA_TOKEN: &str = "qa-token";

pub struct TokenScenario;

impl TokenScenario {
    fn checks() -> Vec<LogicCheck> {
        vec![
            LogicCheck::new("gating table", gating_table),
            LogicCheck::new("tokens are decoded", tokens_decoded),
        ]
    }
}

#[async_trait::async_trait]
impl BrowserScenario for TokenScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        for path in AppPath::ALL {
            let gate = path.token_gate();
            if gate == TokenGate::None {
                continue;
            }

            page.open(path.path()).await?;
            let bare = page.snapshot().await?;
            let stayed = bare.path.ends_with(path.path());
            match gate {
                TokenGate::Required => ensure!(
                    !stayed,
                    "{} without a token should redirect home, stayed on {}",
                    path.path(),
                    bare.path
                ),
                _ => ensure!(
                    stayed,
                    "{} without a token left for {}",
                    path.path(),
                    bare.path
                ),
            }

            page.open(&format!("{}?token={QA_TOKEN}", path.path()))
                .await?;
            let with_token = page.snapshot().await?;
            ensure!(
                with_token.path.ends_with(path.path()),
                "{} with a token redirected to {}",
                path.path(),
                with_token.path
            );
            if ctx.verbose {
                println!("  🔑 {} gate held ({gate:?})", path.path());
            }
        }
        Ok(())
    }
}

impl CombinedScenario for TokenScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Token Gate Test", Self::checks()))
    }
}

/// Decision each page should reach for a query; `None` is a redirect home.
const DECISIONS: [(AppPath, &str, Option<&str>); 10] = [
    (AppPath::RegisterSuccess, "", None),
    (AppPath::RegisterSuccess, "?other=1&token=abc", Some("abc")),
    (AppPath::ResetPassword, "?token=", None),
    (AppPath::ResetPassword, "?token=a%20b", Some("a b")),
    (AppPath::ResetPasswordSuccess, "", None),
    (AppPath::ResetPasswordSuccess, "?token=abc", Some("abc")),
    (AppPath::AccountVerificationSuccess, "", Some("")),
    (AppPath::AccountVerificationSuccess, "?token=abc", Some("abc")),
    (AppPath::Login, "?token=abc", Some("abc")),
    (AppPath::Home, "", Some("")),
];

fn gating_table() -> Result<()> {
    let required = [
        AppPath::RegisterSuccess,
        AppPath::ResetPassword,
        AppPath::ResetPasswordSuccess,
    ];
    for path in AppPath::ALL {
        let gate = path.token_gate();
        ensure!(
            (gate == TokenGate::Required) == required.contains(&path),
            "{} has gate {gate:?}",
            path.path()
        );
    }
    ensure!(
        AppPath::AccountVerificationSuccess.token_gate() == TokenGate::Optional,
        "verification page should read but not require a token"
    );

    for (path, query, allowed) in DECISIONS {
        let want = allowed.map_or(TokenDecision::RedirectHome, |token| {
            TokenDecision::Allow(token.to_string())
        });
        let decision = path.token_gate().check(query);
        ensure!(
            decision == want,
            "{}{query} decided {decision:?}, wanted {want:?}",
            path.path()
        );
    }
    Ok(())
}

fn tokens_decoded() -> Result<()> {
    ensure!(parse_token("?token=a%20b") == Some("a b".to_string()), "%20");
    ensure!(parse_token("token=x+y") == Some("x y".to_string()), "plus");
    ensure!(parse_token("?token").is_none(), "bare key");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_checks_pass_against_core() {
        for check in TokenScenario::checks() {
            (check.run)().unwrap_or_else(|e| panic!("{}: {e:#}", check.label));
        }
    }

    #[test]
    fn decision_table_covers_every_gate() {
        for gate in [TokenGate::Required, TokenGate::Optional, TokenGate::None] {
            assert!(
                DECISIONS.iter().any(|(path, ..)| path.token_gate() == gate),
                "no row for {gate:?}"
            );
        }
        assert!(DECISIONS.iter().any(|(.., allowed)| allowed.is_none()));
    }
}
