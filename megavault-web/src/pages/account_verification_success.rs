use crate::components::SuccessPanel;
use crate::hooks::use_token_gate;
use crate::paths::REGISTER_SUCCESS_ICON;
use megavault_core::AppPath;
use yew::prelude::*;

/// Confirmation page; the token is read but never required.
#[function_component(AccountVerificationSuccessPage)]
pub fn account_verification_success_page() -> Html {
    let _token = use_token_gate(AppPath::AccountVerificationSuccess);
    html! {
        <SuccessPanel
            icon={REGISTER_SUCCESS_ICON}
            title="Your account has verified successfully!"
            message="Now you can use all of the features of MegaVault without any worry in the world."
            action_label="Continue"
        />
    }
}
