use crate::components::icons::{Icon, IconKind};
use crate::components::ui::Button;
use crate::paths::asset_path;
use megavault_core::{BlogPost, ButtonVariant};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub post: BlogPost,
}

#[function_component(BlogCard)]
pub fn blog_card(p: &Props) -> Html {
    let post = &p.post;
    html! {
        <div class="blog-card max-w-full bg-gradient-to-r from-secondary-dark via-primary-dark to-secondary-light w-full flex-[1_0_300px] rounded-lg">
            <img
                alt={post.title.clone()}
                src={asset_path(&post.image)}
                class="w-full aspect-video max-h-[270px] rounded-t-lg"
            />
            <div class="px-3 py-3 w-full text-card-foreground">
                <h3 class="font-bold text-lg max-sm:text-sm">{ post.title.clone() }</h3>
                <p class="font-normal text-sm text-foreground/80 mt-1 max-sm:text-xs">
                    { post.excerpt() }
                </p>
                <div class="mt-7 flex justify-between flex-wrap">
                    <Button
                        variant={ButtonVariant::GhostAccent}
                        class="px-0 py-0 hover:bg-transparent hover:text-accent-dark"
                        href={AttrValue::from(post.link.clone())}
                    >
                        { "Read More..." }
                    </Button>
                    <span class="flex items-center gap-1 max-sm:text-xs">
                        <Icon kind={IconKind::Calendar} class="w-4" />
                        { post.display_date() }
                    </span>
                </div>
            </div>
        </div>
    }
}
