use crate::components::SuccessPanel;
use crate::hooks::use_token_gate;
use crate::paths::RESET_PASSWORD_SUCCESS_ICON;
use megavault_core::AppPath;
use yew::prelude::*;

#[function_component(ResetPasswordSuccessPage)]
pub fn reset_password_success_page() -> Html {
    let _token = use_token_gate(AppPath::ResetPasswordSuccess);
    html! {
        <SuccessPanel
            icon={RESET_PASSWORD_SUCCESS_ICON}
            title="Your password has been changed successfully."
            message="Now you can login into your account with the new password."
            action_label="Back To Login Page"
        />
    }
}
