//! In-memory records behind the account forms.
//!
//! Inputs report `(name, value)` pairs; each record folds them in with
//! [`FormRecord::with_field`]. Submission only checks what the browser would
//! enforce natively (`required`, `type="email"`) and then hands the record to
//! the caller, which logs a redacted summary.

use crate::wizard::RegisterStep;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

const REDACTED: &str = "***";

// Same shape as the HTML `type="email"` constraint.
static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});

#[must_use]
pub fn looks_like_email(candidate: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(candidate))
}

/// Value reported by a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{form} has no field named `{name}`")]
    UnknownField { form: &'static str, name: String },
    #[error("field `{name}` expects a {expected} value")]
    WrongKind {
        name: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is required")]
    MissingField(&'static str),
    #[error("`{0}` must be an email address")]
    InvalidEmail(&'static str),
}

/// A form's field record.
pub trait FormRecord: Serialize + Default + Clone + PartialEq {
    /// Form name used in errors and logs.
    const NAME: &'static str;
    /// Fields masked in [`FormRecord::summary`].
    const SECRET_FIELDS: &'static [&'static str] = &[];

    /// Return the record with `name` set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for names the form does not have
    /// and [`FormError::WrongKind`] when a text field receives a flag or the
    /// reverse.
    fn with_field(self, name: &str, value: FieldValue) -> Result<Self, FormError>;

    /// Check the constraints the browser enforces before submit.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    fn validate(&self) -> Result<(), FormError>;

    /// JSON rendering with secret fields masked, suitable for logging.
    fn summary(&self) -> String {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Some(map) = value.as_object_mut() {
            for key in Self::SECRET_FIELDS {
                if let Some(slot) = map.get_mut(*key) {
                    if slot.as_str().is_some_and(|s| !s.is_empty()) {
                        *slot = Value::from(REDACTED);
                    }
                }
            }
        }
        format!("{} {value}", Self::NAME)
    }
}

fn text(name: &'static str, value: FieldValue) -> Result<String, FormError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        FieldValue::Flag(_) => Err(FormError::WrongKind {
            name,
            expected: "text",
        }),
    }
}

fn flag(name: &'static str, value: FieldValue) -> Result<bool, FormError> {
    match value {
        FieldValue::Flag(flag) => Ok(flag),
        FieldValue::Text(_) => Err(FormError::WrongKind {
            name,
            expected: "boolean",
        }),
    }
}

fn required(name: &'static str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(name))
    } else {
        Ok(())
    }
}

fn unknown(form: &'static str, name: &str) -> FormError {
    FormError::UnknownField {
        form,
        name: name.to_string(),
    }
}

fn mask(value: &str) -> &str {
    if value.is_empty() { "" } else { REDACTED }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub username_or_email: String,
    pub password: String,
}

impl FormRecord for LoginForm {
    const NAME: &'static str = "login";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];

    fn with_field(self, name: &str, value: FieldValue) -> Result<Self, FormError> {
        match name {
            "usernameOrEmail" => Ok(Self {
                username_or_email: text("usernameOrEmail", value)?,
                ..self
            }),
            "password" => Ok(Self {
                password: text("password", value)?,
                ..self
            }),
            other => Err(unknown(Self::NAME, other)),
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("usernameOrEmail", &self.username_or_email)?;
        required("password", &self.password)
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username_or_email", &self.username_or_email)
            .field("password", &mask(&self.password))
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub service_check: bool,
}

impl RegisterForm {
    /// Check only the fields collected on `step`.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed field of that step.
    pub fn validate_step(&self, step: RegisterStep) -> Result<(), FormError> {
        match step {
            RegisterStep::Identity => {
                required("firstname", &self.firstname)?;
                required("lastname", &self.lastname)
            }
            RegisterStep::Contact => {
                required("email", &self.email)?;
                if !looks_like_email(&self.email) {
                    return Err(FormError::InvalidEmail("email"));
                }
                required("username", &self.username)
            }
            RegisterStep::Credentials => {
                required("password", &self.password)?;
                required("confirmPassword", &self.confirm_password)
            }
        }
    }
}

impl FormRecord for RegisterForm {
    const NAME: &'static str = "register";
    const SECRET_FIELDS: &'static [&'static str] = &["password", "confirmPassword"];

    fn with_field(self, name: &str, value: FieldValue) -> Result<Self, FormError> {
        match name {
            "firstname" => Ok(Self {
                firstname: text("firstname", value)?,
                ..self
            }),
            "lastname" => Ok(Self {
                lastname: text("lastname", value)?,
                ..self
            }),
            "username" => Ok(Self {
                username: text("username", value)?,
                ..self
            }),
            "email" => Ok(Self {
                email: text("email", value)?,
                ..self
            }),
            "password" => Ok(Self {
                password: text("password", value)?,
                ..self
            }),
            "confirmPassword" => Ok(Self {
                confirm_password: text("confirmPassword", value)?,
                ..self
            }),
            "serviceCheck" => Ok(Self {
                service_check: flag("serviceCheck", value)?,
                ..self
            }),
            other => Err(unknown(Self::NAME, other)),
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        [
            RegisterStep::Identity,
            RegisterStep::Contact,
            RegisterStep::Credentials,
        ]
        .into_iter()
        .try_for_each(|step| self.validate_step(step))
    }
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &mask(&self.password))
            .field("confirm_password", &mask(&self.confirm_password))
            .field("service_check", &self.service_check)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    /// Username or email address.
    pub username: String,
}

impl FormRecord for ForgotPasswordForm {
    const NAME: &'static str = "forgot-password";

    fn with_field(self, name: &str, value: FieldValue) -> Result<Self, FormError> {
        match name {
            "username" => Ok(Self {
                username: text("username", value)?,
            }),
            other => Err(unknown(Self::NAME, other)),
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("username", &self.username)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl FormRecord for ResetPasswordForm {
    const NAME: &'static str = "reset-password";
    const SECRET_FIELDS: &'static [&'static str] = &["password", "confirmPassword"];

    fn with_field(self, name: &str, value: FieldValue) -> Result<Self, FormError> {
        match name {
            "password" => Ok(Self {
                password: text("password", value)?,
                ..self
            }),
            "confirmPassword" => Ok(Self {
                confirm_password: text("confirmPassword", value)?,
                ..self
            }),
            other => Err(unknown(Self::NAME, other)),
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        required("password", &self.password)?;
        required("confirmPassword", &self.confirm_password)
    }
}

impl fmt::Debug for ResetPasswordForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordForm")
            .field("password", &mask(&self.password))
            .field("confirm_password", &mask(&self.confirm_password))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_register() -> RegisterForm {
        [
            ("firstname", FieldValue::from("John")),
            ("lastname", FieldValue::from("Doe")),
            ("email", FieldValue::from("JohnDoe@email.com")),
            ("username", FieldValue::from("JohnDoe")),
            ("password", FieldValue::from("hunter22")),
            ("confirmPassword", FieldValue::from("hunter22")),
            ("serviceCheck", FieldValue::from(true)),
        ]
        .into_iter()
        .try_fold(RegisterForm::default(), |form, (name, value)| {
            form.with_field(name, value)
        })
        .expect("all fields exist")
    }

    #[test]
    fn login_fields_update_by_name() {
        let form = LoginForm::default()
            .with_field("usernameOrEmail", "JohnDoe".into())
            .and_then(|f| f.with_field("password", "secret".into()))
            .expect("known fields");
        assert_eq!(form.username_or_email, "JohnDoe");
        assert_eq!(form.password, "secret");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn unknown_and_mistyped_fields_are_rejected() {
        let err = LoginForm::default()
            .with_field("nickname", "x".into())
            .expect_err("unknown field");
        assert!(matches!(err, FormError::UnknownField { form: "login", .. }));

        let err = RegisterForm::default()
            .with_field("serviceCheck", "yes".into())
            .expect_err("flag field");
        assert_eq!(
            err,
            FormError::WrongKind {
                name: "serviceCheck",
                expected: "boolean"
            }
        );
    }

    #[test]
    fn register_validates_step_by_step() {
        let form = RegisterForm::default()
            .with_field("firstname", "John".into())
            .expect("known field");
        assert_eq!(
            form.validate_step(RegisterStep::Identity),
            Err(FormError::MissingField("lastname"))
        );
        let form = filled_register();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn register_email_must_look_like_an_address() {
        let form = filled_register()
            .with_field("email", "not-an-email".into())
            .expect("known field");
        assert_eq!(
            form.validate_step(RegisterStep::Contact),
            Err(FormError::InvalidEmail("email"))
        );
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("john.doe+vault@mail.example.com"));
        assert!(!looks_like_email("john@"));
        assert!(!looks_like_email("john doe@example.com"));
    }

    #[test]
    fn terms_checkbox_is_optional_like_the_markup() {
        let form = filled_register()
            .with_field("serviceCheck", false.into())
            .expect("known field");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn summaries_and_debug_mask_passwords() {
        let form = filled_register();
        let summary = form.summary();
        assert!(summary.starts_with("register "));
        assert!(summary.contains("JohnDoe@email.com"));
        assert!(!summary.contains("hunter22"));
        assert!(summary.contains("\"confirmPassword\":\"***\""));
        assert!(!format!("{form:?}").contains("hunter22"));

        let empty = ResetPasswordForm::default().summary();
        assert!(empty.contains("\"password\":\"\""));
    }

    #[test]
    fn forgot_and_reset_require_their_fields() {
        assert_eq!(
            ForgotPasswordForm::default().validate(),
            Err(FormError::MissingField("username"))
        );
        let reset = ResetPasswordForm::default()
            .with_field("password", "abc".into())
            .expect("known field");
        assert_eq!(
            reset.validate(),
            Err(FormError::MissingField("confirmPassword"))
        );
    }

    #[test]
    fn records_serialize_with_markup_field_names() {
        let json = serde_json::to_string(&filled_register()).expect("serialize");
        assert!(json.contains("\"serviceCheck\":true"));
        assert!(json.contains("\"firstname\":\"John\""));
        let login = serde_json::to_string(&LoginForm::default()).expect("serialize");
        assert!(login.contains("usernameOrEmail"));
    }
}
