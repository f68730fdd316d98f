use crate::components::ui::Button;
use crate::paths::asset_path;
use crate::router::Route;
use megavault_core::{ButtonSize, ButtonVariant};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Asset path of the illustration.
    pub icon: AttrValue,
    pub title: AttrValue,
    pub message: AttrValue,
    pub action_label: AttrValue,
    #[prop_or(Route::Login)]
    pub action_to: Route,
}

#[function_component(SuccessPanel)]
pub fn success_panel(p: &Props) -> Html {
    html! {
        <div class="success-page min-h-screen w-screen bg-home-background flex flex-col items-center">
            <div class="flex flex-col items-center w-full justify-center px-4 pt-12 pb-24 min-h-screen max-w-[900px]">
                <img src={asset_path(&p.icon)} alt="success" class="w-32 mb-6" />
                <h1 class="font-bold text-2xl text-center mb-4">{ p.title.clone() }</h1>
                <p class="text-center font-normal text-lg mb-16">{ p.message.clone() }</p>
                <Button variant={ButtonVariant::ContainedAccent} size={ButtonSize::Lg} to={p.action_to}>
                    { p.action_label.clone() }
                </Button>
            </div>
        </div>
    }
}
