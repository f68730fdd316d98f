use crate::components::ui::Button;
use crate::components::{BlogCard, BlogPagination, SiteFooter, SiteHeader};
use crate::dom;
use crate::hooks::{Pager, Sidebar, use_scroll_tracker, use_viewport_page_size};
use crate::paths::{
    DETAILS_IMAGE, HOME_ILLUSTRATION, SECURE_DATA_ICON, SECURITY_ICON, SPEED_ICON, asset_path,
};
use crate::router::Route;
use megavault_core::{
    BlogCatalog, ButtonVariant, PaginationAction, PaginationState, Radius, SidebarAction,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogSectionProps {
    pub catalog: Rc<BlogCatalog>,
    pub pager: PaginationState,
    #[prop_or_default]
    pub on_page: Callback<usize>,
}

/// Blog grid for the current page plus its pagination buttons.
#[function_component(BlogSection)]
pub fn blog_section(p: &BlogSectionProps) -> Html {
    let visible = p.pager.visible(&p.catalog.posts);
    html! {
        <section id="blog" class="flex w-full justify-center">
            <div class="w-full max-w-[1440px] flex items-center flex-col px-12 py-6 max-md:px-8 max-sm:px-6">
                <h3 class="text-5xl font-extrabold">{ "Blog" }</h3>
                <div class="blog-grid max-w-[1000px] grid grid-cols-3 items-center justify-center gap-x-10 gap-y-7 mt-16 max-lg:grid-cols-2 max-[500px]:grid-cols-1">
                    { for visible.iter().map(|post| html! {
                        <BlogCard key={post.title.clone()} post={post.clone()} />
                    }) }
                </div>
                <div class="mt-12">
                    <BlogPagination
                        current_page={p.pager.current_page}
                        total_pages={p.pager.total_pages}
                        on_change={p.on_page.clone()}
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_state_eq(|| Rc::new(BlogCatalog::default()));
    let pager = use_reducer_eq(Pager::default);
    let sidebar = use_reducer_eq(Sidebar::default);
    let scroll = use_scroll_tracker();
    let page_size = use_viewport_page_size();

    {
        let catalog = catalog.clone();
        let pager = pager.dispatcher();
        use_effect_with((), move |()| {
            let loaded = BlogCatalog::sample(dom::today());
            log::info!("loaded {} blog posts", loaded.len());
            pager.dispatch(PaginationAction::ItemsLoaded(loaded.len()));
            catalog.set(Rc::new(loaded));
        });
    }
    {
        let pager = pager.dispatcher();
        use_effect_with(page_size, move |size| {
            pager.dispatch(PaginationAction::PageSizeChanged(*size));
        });
    }
    use_effect_with(pager.0, |state| {
        let lost = state.unreachable_items();
        if lost > 0 {
            log::warn!(
                "{lost} blog post(s) fall outside {} page(s) of {}",
                state.total_pages,
                state.page_size
            );
        }
    });

    let on_page = {
        let pager = pager.dispatcher();
        Callback::from(move |page: usize| pager.dispatch(PaginationAction::RequestPage(page)))
    };
    let on_open_sidebar = {
        let sidebar = sidebar.dispatcher();
        Callback::from(move |()| sidebar.dispatch(SidebarAction::Open))
    };
    let on_close_sidebar = {
        let sidebar = sidebar.dispatcher();
        Callback::from(move |()| sidebar.dispatch(SidebarAction::Close))
    };

    html! {
        <div class="home min-h-screen w-screen bg-home-background flex flex-col items-center">
            <div class="w-full gap-y-24 flex flex-col">
                <SiteHeader
                    scroll={scroll}
                    sidebar_open={sidebar.0.is_open()}
                    on_open_sidebar={on_open_sidebar}
                    on_close_sidebar={on_close_sidebar}
                />
                { hero() }
                { details() }
                <BlogSection catalog={(*catalog).clone()} pager={pager.0} on_page={on_page} />
                <SiteFooter />
            </div>
        </div>
    }
}

fn hero() -> Html {
    html! {
        <section class="flex w-full justify-center">
            <div class="w-full max-w-[1440px] flex flex-row-reverse gap-x-20 gap-y-16 items-center justify-between max-md:flex-col px-12 py-6 pt-32 max-md:px-8 max-sm:px-6">
                <div>
                    <img
                        src={asset_path(HOME_ILLUSTRATION)}
                        alt="secure cloud"
                        class="w-full max-w-[445px] max-lg:max-w-[400px] flex-1 max-md:max-w-[350px]"
                    />
                </div>
                <div class="flex-1 max-w-[700px]">
                    <h2 class="font-extrabold text-3xl tracking-wide">
                        { "Your Data, Your Way. Securely Stored. Easily Accessed." }
                    </h2>
                    <p class="font-normal text-sm text-foreground/90 mt-5">
                        { "MegaVault provides you with a secure, fast, and reliable cloud storage solution that allows you to access your data anytime, anywhere. Whether you need to back up your files, share documents with colleagues, or simply have peace of mind knowing your data is safe, MegaVault is the perfect solution for you. Our advanced security features, lightning-fast speeds, and reliable infrastructure ensure that your data is always protected and readily available. With MegaVault, you can focus on what matters most - your work, your life, and your peace of mind." }
                    </p>
                    <div class="mt-14 flex items-center gap-4 max-sm:flex-col">
                        <Button radius={Radius::Full} to={Route::Home} class="max-sm:w-full">
                            { "Try it out for free!" }
                        </Button>
                        <span>{ "Or" }</span>
                        <Button
                            variant={ButtonVariant::OutlinedAccent}
                            radius={Radius::Full}
                            to={Route::Login}
                            class="max-sm:w-full"
                        >
                            { "Log In" }
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn details() -> Html {
    let features = [
        (SECURITY_ICON, "Secure & Reliable"),
        (SPEED_ICON, "Fast & Smooth"),
        (SECURE_DATA_ICON, "Safe Data Encryption"),
    ];
    html! {
        <section class="flex justify-center bg-popover w-full">
            <div class="w-full max-w-[1440px] flex gap-x-20 gap-y-16 items-center justify-between my-8 max-md:flex-col px-12 py-6 max-md:px-8 max-sm:px-6">
                <div class="z-[1]">
                    <img
                        class="w-full max-w-[545px] max-xl:max-w-[445px] max-lg:max-w-[400px] flex-1 max-md:max-w-[350px]"
                        src={asset_path(DETAILS_IMAGE)}
                        alt="secure, fast and simple"
                    />
                </div>
                <div class="flex flex-col flex-1 max-w-[700px] z-[1] max-lg:max-w-full">
                    <h2 class="text-right font-bold text-2xl tracking-wide">
                        { "Experience the Power of Encryption. Enjoy the Freedom of Free Storage." }
                    </h2>
                    <p class="text-right font-normal text-sm mt-5">
                        { "Whether it's important documents, precious photos, or irreplaceable memories, MegaVault keeps your data safe from prying eyes and unauthorized access. We employ industry-leading encryption protocols to ensure the highest level of security, giving you peace of mind knowing your data is protected. And the best part? MegaVault offers a generous amount of free storage, so you can start protecting your data without any upfront costs. Experience the power of secure, reliable cloud storage without breaking the bank." }
                    </p>
                    <div class="flex items-center gap-7 text-center justify-center w-fit self-end mt-9">
                        { for features.iter().map(|(icon, label)| html! {
                            <div class="flex flex-col items-center">
                                <img src={asset_path(icon)} alt="" class="w-9 mb-1" />
                                <span class="text-sm">{ *label }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
