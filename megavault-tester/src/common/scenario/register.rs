use anyhow::{Result, bail, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx, TestScenario};
use crate::browser::SitePage;
use megavault_core::{
    FieldValue, FormError, FormRecord, MAX_STEP, RegisterForm, RegisterStep, WizardAction,
};

const SUBMIT: &str = "#register-form button[type='submit']";
const BACK: &str = "#register-form [aria-label='Previous page']";

pub struct RegisterScenario;

impl RegisterScenario {
    fn checks() -> Vec<LogicCheck> {
        vec![
            LogicCheck::new("wizard walks forward and back", wizard_walk),
            LogicCheck::new("steps validate their own fields", steps_validate),
            LogicCheck::new("step fields exist on the record", step_fields_exist),
            LogicCheck::new("summary masks passwords", summary_masks_passwords),
        ]
    }
}

async fn expect_step(page: &SitePage<'_>, expected: u8) -> Result<()> {
    let snapshot = page.snapshot().await?;
    let expected = expected.to_string();
    ensure!(
        snapshot.step.as_deref() == Some(expected.as_str()),
        "expected wizard step {expected}, page shows {:?}",
        snapshot.step
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for RegisterScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/register").await?;
        expect_step(page, 1).await?;

        // Native `required` keeps an empty step in place.
        page.click(SUBMIT).await?;
        expect_step(page, 1).await?;

        page.fill("firstname", "Jane").await?;
        page.fill("lastname", "Doe").await?;
        page.click(SUBMIT).await?;
        expect_step(page, 2).await?;

        page.fill("email", "jane@example.com").await?;
        page.fill("username", "jane").await?;
        page.click(SUBMIT).await?;
        expect_step(page, 3).await?;
        if ctx.verbose {
            println!("  🧾 Reached the credentials step");
        }

        page.click(BACK).await?;
        expect_step(page, 2).await?;
        page.click(BACK).await?;
        expect_step(page, 1).await?;
        Ok(())
    }
}

impl CombinedScenario for RegisterScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Registration Wizard Test", Self::checks()))
    }
}

fn wizard_walk() -> Result<()> {
    let mut step = RegisterStep::default();
    ensure!(step.is_first(), "wizard should open on the first step");
    ensure!(
        step.apply(WizardAction::Back) == step,
        "back on the first step moved"
    );

    for expected in 2..=MAX_STEP {
        step = step.apply(WizardAction::Next);
        ensure!(step.number() == expected, "next landed on {step:?}");
        ensure!(
            step.caption() == format!("Page {expected}/{MAX_STEP}"),
            "caption {}",
            step.caption()
        );
    }
    ensure!(step.is_last(), "walking forward should reach the last step");
    ensure!(
        step.apply(WizardAction::Next) == step,
        "next on the last step moved"
    );

    for expected in (1..MAX_STEP).rev() {
        step = step.apply(WizardAction::Back);
        ensure!(step.number() == expected, "back landed on {step:?}");
    }
    Ok(())
}

fn fill(form: RegisterForm, pairs: &[(&str, &str)]) -> Result<RegisterForm> {
    pairs
        .iter()
        .try_fold(form, |form, (name, value)| -> Result<RegisterForm> {
            Ok(form.with_field(name, FieldValue::from(*value))?)
        })
}

fn steps_validate() -> Result<()> {
    let form = RegisterForm::default();
    ensure!(
        form.validate_step(RegisterStep::Identity) == Err(FormError::MissingField("firstname")),
        "empty identity step should ask for firstname"
    );

    let form = fill(form, &[("firstname", "Jane"), ("lastname", "Doe")])?;
    form.validate_step(RegisterStep::Identity)?;

    let form = fill(form, &[("email", "not-an-email"), ("username", "jane")])?;
    match form.validate_step(RegisterStep::Contact) {
        Err(FormError::InvalidEmail(_)) => {}
        other => bail!("malformed email accepted: {other:?}"),
    }

    let form = fill(form, &[("email", "jane@example.com")])?;
    form.validate_step(RegisterStep::Contact)?;

    let form = fill(form, &[("password", "hunter22"), ("confirmPassword", "hunter22")])?;
    form.validate_step(RegisterStep::Credentials)?;
    form.validate()?;
    Ok(())
}

fn step_fields_exist() -> Result<()> {
    let mut step = RegisterStep::default();
    loop {
        for name in step.fields() {
            let value = if *name == "serviceCheck" {
                FieldValue::Flag(true)
            } else {
                FieldValue::from("x")
            };
            RegisterForm::default().with_field(name, value)?;
        }
        if step.is_last() {
            break;
        }
        step = step.apply(WizardAction::Next);
    }

    ensure!(
        matches!(
            RegisterForm::default().with_field("nickname", FieldValue::from("x")),
            Err(FormError::UnknownField { .. })
        ),
        "unknown field accepted"
    );
    Ok(())
}

fn summary_masks_passwords() -> Result<()> {
    let form = fill(
        RegisterForm::default(),
        &[("username", "jane"), ("password", "hunter22")],
    )?;
    let summary = form.summary();
    ensure!(summary.contains("jane"), "summary lost the username");
    ensure!(!summary.contains("hunter22"), "summary leaked the password");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_checks_pass_against_core() {
        for check in RegisterScenario::checks() {
            (check.run)().unwrap_or_else(|e| panic!("{}: {e:#}", check.label));
        }
    }

    #[test]
    fn fill_reports_unknown_fields() {
        let err = fill(RegisterForm::default(), &[("nickname", "x")]).expect_err("unknown");
        assert!(err.to_string().contains("nickname"));
    }
}
