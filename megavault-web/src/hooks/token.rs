use crate::router::Route;
use megavault_core::{AppPath, TokenDecision};
use yew::prelude::*;
use yew_router::prelude::*;

/// Read the `token` query parameter for `path`, sending the visitor home
/// when the page requires one and it is missing.
///
/// Returns the token, empty when absent.
#[hook]
pub fn use_token_gate(path: AppPath) -> String {
    let location = use_location();
    let navigator = use_navigator();
    let query = location
        .as_ref()
        .map(|loc| loc.query_str().to_string())
        .unwrap_or_default();
    let decision = path.token_gate().check(&query);

    use_effect_with(decision.clone(), move |decision| match decision {
        TokenDecision::RedirectHome => {
            log::info!("{} opened without a token, redirecting home", path.path());
            if let Some(nav) = navigator {
                nav.replace(&Route::Home);
            }
        }
        TokenDecision::Allow(token) if !token.is_empty() => {
            log::debug!("{} token received ({} chars)", path.path(), token.len());
        }
        TokenDecision::Allow(_) => {}
    });

    match decision {
        TokenDecision::Allow(token) => token,
        TokenDecision::RedirectHome => String::new(),
    }
}
