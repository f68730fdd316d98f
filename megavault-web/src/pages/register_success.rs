use crate::components::SuccessPanel;
use crate::hooks::use_token_gate;
use crate::paths::REGISTER_SUCCESS_ICON;
use megavault_core::AppPath;
use yew::prelude::*;

#[function_component(RegisterSuccessPage)]
pub fn register_success_page() -> Html {
    let _token = use_token_gate(AppPath::RegisterSuccess);
    html! {
        <SuccessPanel
            icon={REGISTER_SUCCESS_ICON}
            title="Congrats! You are now a part of MegaVault community!"
            message="Now you can login into your account and use all of the free features of MegaVault. Don't forget to share MegaVault with your friends!"
            action_label="Back To Login Page"
        />
    }
}
