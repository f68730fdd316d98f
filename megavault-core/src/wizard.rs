//! Three-step registration wizard.
//!
//! Steps advance strictly one at a time. Submitting the final step is the
//! page's business; the wizard only tracks where the user is.

/// Number of wizard steps.
pub const MAX_STEP: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterStep {
    /// First and last name.
    #[default]
    Identity,
    /// Email and username.
    Contact,
    /// Password, confirmation and terms checkbox.
    Credentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
}

impl RegisterStep {
    /// 1-based position, as shown in the "Page n/3" caption.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Contact => 2,
            Self::Credentials => 3,
        }
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::Identity)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Credentials)
    }

    #[must_use]
    pub const fn apply(self, action: WizardAction) -> Self {
        match (self, action) {
            (Self::Identity, WizardAction::Next) | (Self::Credentials, WizardAction::Back) => {
                Self::Contact
            }
            (Self::Contact, WizardAction::Next) => Self::Credentials,
            (Self::Contact, WizardAction::Back) => Self::Identity,
            (Self::Identity, WizardAction::Back) | (Self::Credentials, WizardAction::Next) => self,
        }
    }

    /// Caption under the heading.
    #[must_use]
    pub fn caption(self) -> String {
        format!("Page {}/{MAX_STEP}", self.number())
    }

    /// Field names collected on this step.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Identity => &["firstname", "lastname"],
            Self::Contact => &["email", "username"],
            Self::Credentials => &["password", "confirmPassword", "serviceCheck"],
        }
    }
}
