use crate::components::icons::{Icon, IconKind};
use crate::components::site_header::nav_item;
use crate::components::ui::Button;
use crate::paths::{LOGO, asset_path};
use megavault_core::{BRAND, ButtonSize, ButtonVariant, COPYRIGHT, NAV_LINKS};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

/// Full-screen menu that slides in on narrow screens.
#[function_component(SidebarMenu)]
pub fn sidebar_menu(p: &Props) -> Html {
    let onclick = {
        let on_close = p.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let slide = if p.open {
        "translate-x-[0%]"
    } else {
        "translate-x-[100%]"
    };
    html! {
        <div
            class={classes!(
                "sidebar-menu",
                "hidden", "flex-col", "items-center", "transition-transform", "py-5", "px-4",
                "duration-200", "ease-linear", "z-[5000]", "right-0", "top-0", "h-screen",
                "bg-popover", "fixed", "w-screen", "max-md:flex",
                slide
            )}
            data-open={p.open.to_string()}
            aria-hidden={(!p.open).to_string()}
        >
            <img class="w-12" src={asset_path(LOGO)} alt={BRAND} />
            <h1 class="font-bold text-center text-lg">{ BRAND }</h1>
            <Button
                variant={ButtonVariant::LinkPrimary}
                size={ButtonSize::Icon}
                class="absolute top-7 right-6"
                aria_label="Close menu"
                onclick={onclick}
            >
                <Icon kind={IconKind::Close} />
            </Button>
            <ul class="flex flex-col items-center mt-6 gap-4">
                { for NAV_LINKS.iter().map(|link| nav_item(*link, ButtonVariant::LinkPrimary)) }
            </ul>
            <span class="font-normal text-sm text-foreground/50 mt-auto text-center">
                { COPYRIGHT }
            </span>
        </div>
    }
}
