use crate::components::icons::{Icon, IconKind};
use crate::components::sidebar::SidebarMenu;
use crate::components::ui::Button;
use crate::paths::{LOGO, asset_path};
use crate::router::Route;
use megavault_core::{
    BRAND, ButtonSize, ButtonVariant, NAV_LINKS, NavLink, ScrollTracker, header_hidden,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub scroll: ScrollTracker,
    #[prop_or_default]
    pub sidebar_open: bool,
    #[prop_or_default]
    pub on_open_sidebar: Callback<()>,
    #[prop_or_default]
    pub on_close_sidebar: Callback<()>,
}

/// `<li>` wrapping a navigation link button. Anchors stay plain links so the
/// browser scrolls instead of routing.
pub(crate) fn nav_item(link: NavLink, variant: ButtonVariant) -> Html {
    let to = if link.is_anchor() {
        None
    } else {
        Route::for_href(link.href)
    };
    html! {
        <li key={link.title}>
            <Button variant={variant} to={to} href={link.href}>{ link.title }</Button>
        </li>
    }
}

/// Fixed header that slides away while scrolling down and gains a blurred
/// backdrop once the page is scrolled.
#[function_component(SiteHeader)]
pub fn site_header(p: &Props) -> Html {
    let hidden = header_hidden(p.scroll.is_scrolling_down(), p.sidebar_open);
    let slide = if hidden {
        "translate-y-[-100%]"
    } else {
        "translate-y-[0%]"
    };
    let backdrop = p.scroll.is_scrolled().then_some("backdrop-blur-lg bg-black/30");
    let open = {
        let cb = p.on_open_sidebar.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <header
            class={classes!(
                "site-header",
                "w-full", "fixed", "duration-300", "top-0", "left-0", "right-0", "px-12",
                "transition-all", "py-6", "flex", "justify-center", "max-md:px-8",
                "max-sm:px-6", "z-[5000]",
                slide,
                backdrop
            )}
            data-hidden={hidden.to_string()}
        >
            <nav class="w-full flex items-center gap-4 max-w-[1440px]">
                <img class="w-12" src={asset_path(LOGO)} alt={BRAND} />
                <h1 class="font-bold text-lg">{ BRAND }</h1>
                <ul class="ml-auto flex items-center gap-12 max-md:hidden">
                    { for NAV_LINKS.iter().map(|link| nav_item(*link, ButtonVariant::LinkPrimary)) }
                </ul>
                <Button
                    variant={ButtonVariant::LinkPrimary}
                    size={ButtonSize::Icon}
                    class="hidden ml-auto max-md:inline-flex"
                    aria_label="Open menu"
                    onclick={open}
                >
                    <Icon kind={IconKind::Menu} />
                </Button>
                <SidebarMenu open={p.sidebar_open} on_close={p.on_close_sidebar.clone()} />
            </nav>
        </header>
    }
}
