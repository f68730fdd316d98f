//! Client-side paths and the query-token gate on the success pages.

use percent_encoding::percent_decode_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppPath {
    Home,
    Login,
    Register,
    RegisterSuccess,
    AccountVerificationSuccess,
    ForgotPassword,
    ResetPassword,
    ResetPasswordSuccess,
    NotFound,
}

impl AppPath {
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::RegisterSuccess,
        Self::AccountVerificationSuccess,
        Self::ForgotPassword,
        Self::ResetPassword,
        Self::ResetPasswordSuccess,
        Self::NotFound,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::RegisterSuccess => "/register-success",
            Self::AccountVerificationSuccess => "/account-verification-success",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::ResetPasswordSuccess => "/reset-password-success",
            Self::NotFound => "/404",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or(path);
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.path() == trimmed)
            .unwrap_or(Self::NotFound)
    }

    /// Gate applied when the page mounts.
    #[must_use]
    pub const fn token_gate(self) -> TokenGate {
        match self {
            Self::RegisterSuccess | Self::ResetPassword | Self::ResetPasswordSuccess => {
                TokenGate::Required
            }
            Self::AccountVerificationSuccess => TokenGate::Optional,
            Self::Home
            | Self::Login
            | Self::Register
            | Self::ForgotPassword
            | Self::NotFound => TokenGate::None,
        }
    }
}

/// How a page treats the `token` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGate {
    /// The page ignores tokens.
    None,
    /// The token is read if present but never required.
    Optional,
    /// A missing or empty token sends the visitor home.
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenDecision {
    /// Render the page; carries the token, empty when absent.
    Allow(String),
    RedirectHome,
}

impl TokenGate {
    /// Decide what to do with the raw query string (leading `?` optional).
    #[must_use]
    pub fn check(self, query: &str) -> TokenDecision {
        let token = parse_token(query);
        match (self, token) {
            (Self::Required, None) => TokenDecision::RedirectHome,
            (_, token) => TokenDecision::Allow(token.unwrap_or_default()),
        }
    }
}

/// First `token` value in `query`, percent-decoded.
///
/// Returns `None` when the parameter is absent or empty.
#[must_use]
pub fn parse_token(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == "token")
        .map(|(_, raw)| {
            percent_decode_str(&raw.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for path in AppPath::ALL {
            assert_eq!(AppPath::from_path(path.path()), path);
        }
        assert_eq!(AppPath::from_path("/login/"), AppPath::Login);
        assert_eq!(
            AppPath::from_path("/reset-password?token=abc"),
            AppPath::ResetPassword
        );
        assert_eq!(AppPath::from_path("/blog/1"), AppPath::NotFound);
    }

    #[test]
    fn token_parsing_decodes_and_rejects_empty() {
        assert_eq!(parse_token("?token=abc123"), Some("abc123".into()));
        assert_eq!(parse_token("a=1&token=x%2By+z"), Some("x+y z".into()));
        assert_eq!(parse_token("?token="), None);
        assert_eq!(parse_token("?token"), None);
        assert_eq!(parse_token(""), None);
        assert_eq!(parse_token("?tokens=abc"), None);
        assert_eq!(parse_token("?token=first&token=second"), Some("first".into()));
    }

    #[test]
    fn required_gate_redirects_without_token() {
        let gate = AppPath::ResetPassword.token_gate();
        assert_eq!(gate.check(""), TokenDecision::RedirectHome);
        assert_eq!(gate.check("?token="), TokenDecision::RedirectHome);
        assert_eq!(gate.check("?token=t"), TokenDecision::Allow("t".into()));
        assert_eq!(
            AppPath::RegisterSuccess.token_gate().check("?x=1"),
            TokenDecision::RedirectHome
        );
        assert_eq!(
            AppPath::ResetPasswordSuccess.token_gate().check(""),
            TokenDecision::RedirectHome
        );
    }

    #[test]
    fn verification_page_never_redirects() {
        let gate = AppPath::AccountVerificationSuccess.token_gate();
        assert_eq!(gate, TokenGate::Optional);
        assert_eq!(gate.check(""), TokenDecision::Allow(String::new()));
        assert_eq!(gate.check("?token=v"), TokenDecision::Allow("v".into()));
    }

    #[test]
    fn ungated_pages_ignore_tokens() {
        for path in [AppPath::Home, AppPath::Login, AppPath::Register] {
            assert_eq!(path.token_gate(), TokenGate::None);
            assert_eq!(
                path.token_gate().check(""),
                TokenDecision::Allow(String::new())
            );
        }
    }
}
