use megavault_core::AppPath;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/register-success")]
    RegisterSuccess,
    #[at("/account-verification-success")]
    AccountVerificationSuccess,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/reset-password-success")]
    ResetPasswordSuccess,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_app_path(path: AppPath) -> Self {
        match path {
            AppPath::Home => Self::Home,
            AppPath::Login => Self::Login,
            AppPath::Register => Self::Register,
            AppPath::RegisterSuccess => Self::RegisterSuccess,
            AppPath::AccountVerificationSuccess => Self::AccountVerificationSuccess,
            AppPath::ForgotPassword => Self::ForgotPassword,
            AppPath::ResetPassword => Self::ResetPassword,
            AppPath::ResetPasswordSuccess => Self::ResetPasswordSuccess,
            AppPath::NotFound => Self::NotFound,
        }
    }

    #[must_use]
    pub const fn app_path(self) -> AppPath {
        match self {
            Self::Home => AppPath::Home,
            Self::Login => AppPath::Login,
            Self::Register => AppPath::Register,
            Self::RegisterSuccess => AppPath::RegisterSuccess,
            Self::AccountVerificationSuccess => AppPath::AccountVerificationSuccess,
            Self::ForgotPassword => AppPath::ForgotPassword,
            Self::ResetPassword => AppPath::ResetPassword,
            Self::ResetPasswordSuccess => AppPath::ResetPasswordSuccess,
            Self::NotFound => AppPath::NotFound,
        }
    }

    /// Route for an internal href; anchors and unknown paths give `None`.
    #[must_use]
    pub fn for_href(href: &str) -> Option<Self> {
        if href.starts_with('#') || href.contains("://") {
            return None;
        }
        match AppPath::from_path(href) {
            AppPath::NotFound => None,
            path => Some(Self::from_app_path(path)),
        }
    }
}
