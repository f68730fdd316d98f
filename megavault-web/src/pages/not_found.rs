use crate::components::ui::Button;
use crate::router::Route;
use megavault_core::{ButtonSize, ButtonVariant};
use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found min-h-screen w-screen bg-home-background flex flex-col items-center justify-center gap-8 px-4">
            <h1 class="font-extrabold text-5xl">{ "404" }</h1>
            <p class="text-center text-lg">{ "This page does not exist." }</p>
            <Button variant={ButtonVariant::ContainedAccent} size={ButtonSize::Lg} to={Route::Home}>
                { "Back Home" }
            </Button>
        </div>
    }
}
