use crate::components::icons::{Icon, IconKind};
use crate::components::site_header::nav_item;
use crate::components::ui::Button;
use crate::paths::{LOGO, asset_path};
use megavault_core::{BRAND, ButtonSize, ButtonVariant, COPYRIGHT, NAV_LINKS};
use yew::prelude::*;

const SOCIAL: [IconKind; 3] = [IconKind::Instagram, IconKind::Github, IconKind::Twitter];

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer justify-center flex w-full bg-popover">
            <div class="w-full gap-x-20 gap-y-16 max-w-[1440px] flex justify-between items-center flex-col px-12 py-6 max-md:px-8 max-sm:px-6">
                <div class="z-[1] flex flex-col items-center">
                    <img src={asset_path(LOGO)} alt={BRAND} class="w-16" />
                    <h4 class="font-bold text-center text-xl mt-4">{ BRAND }</h4>
                    <p class="text-sm text-foreground/90 text-center font-normal mt-4">
                        { "Your Digital Fortress, Made Easy." }
                    </p>
                    <ul class="flex items-center gap-5 mt-4">
                        { for SOCIAL.iter().map(|kind| html! {
                            <li key={kind.name()}>
                                <Button
                                    variant={ButtonVariant::LinkPrimary}
                                    size={ButtonSize::Icon}
                                    href="#"
                                    target="_blank"
                                    aria_label={kind.name()}
                                >
                                    <Icon kind={*kind} />
                                </Button>
                            </li>
                        }) }
                    </ul>
                    <ul class="flex items-center gap-10 max-sm:gap-6 flex-wrap justify-center mt-10">
                        { for NAV_LINKS.iter().map(|link| nav_item(*link, ButtonVariant::LinkPrimary)) }
                    </ul>
                    <span class="font-normal text-sm text-foreground/50 mt-16 text-center">
                        { COPYRIGHT }
                    </span>
                </div>
            </div>
        </footer>
    }
}
