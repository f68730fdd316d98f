use crate::paths::{LOGO, asset_path};
use megavault_core::BRAND;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

/// Centred card with the floating logo, shared by the account forms.
#[function_component(AuthCard)]
pub fn auth_card(p: &Props) -> Html {
    html! {
        <div class="auth-page min-h-screen w-screen bg-home-background flex flex-col items-center justify-center py-16 max-md:py-0">
            <div class="auth-card flex flex-col bg-popover items-center px-6 pt-12 pb-6 w-full max-w-[600px] relative rounded-lg max-md:max-w-full max-md:min-h-screen">
                <img
                    class="w-20 absolute -top-10 left-[50%] translate-x-[-50%] max-md:static max-md:translate-x-0 max-md:mb-3"
                    src={asset_path(LOGO)}
                    alt={BRAND}
                />
                { for p.children.iter() }
            </div>
        </div>
    }
}
