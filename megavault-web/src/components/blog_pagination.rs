use crate::components::ui::Button;
use megavault_core::{ButtonVariant, clamp_current_page, page_window};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_page: usize,
    pub total_pages: usize,
    /// Receives the 1-based page that was clicked.
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

/// Up to three page buttons around the current page.
#[function_component(BlogPagination)]
pub fn blog_pagination(p: &Props) -> Html {
    let current = clamp_current_page(p.current_page, p.total_pages);
    let window = page_window(current, p.total_pages);
    html! {
        <div class="blog-pagination flex flex-wrap justify-evenly items-center gap-5">
            { for window.pages().map(|page| {
                let on_change = p.on_change.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_change.emit(page));
                let active = page == current;
                let variant = if active { ButtonVariant::ContainedPrimary } else { ButtonVariant::Muted };
                let class = if active { "hover:bg-primary" } else { "" };
                html! {
                    <Button
                        key={format!("blog-pagination-{page}")}
                        variant={variant}
                        class={class}
                        aria_label={AttrValue::from(format!("Page {page}"))}
                        onclick={onclick}
                    >
                        { page }
                    </Button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(current_page: usize, total_pages: usize) -> String {
        let props = Props {
            current_page,
            total_pages,
            on_change: Callback::noop(),
        };
        block_on(LocalServerRenderer::<BlogPagination>::with_props(props).render())
    }

    fn button_tag(html: &str, page: usize) -> &str {
        let label = format!("aria-label=\"Page {page}\"");
        html.split("<button")
            .map(|chunk| chunk.split('>').next().unwrap_or_default())
            .find(|tag| tag.contains(&label))
            .unwrap_or_default()
    }

    #[test]
    fn first_page_shows_leading_buttons() {
        let html = render(1, 5);
        assert!(html.contains("Page 1"));
        assert!(html.contains("Page 3"));
        assert!(!html.contains("Page 4"));
    }

    #[test]
    fn middle_page_is_centred() {
        let html = render(4, 5);
        assert!(!html.contains("Page 2"));
        assert!(html.contains("Page 3"));
        assert!(html.contains("Page 5"));
    }

    #[test]
    fn zero_pages_render_no_buttons() {
        assert!(!render(1, 0).contains("<button"));
    }

    #[test]
    fn stale_page_is_clamped_before_highlighting() {
        let html = render(7, 2);
        assert_eq!(html.matches("<button").count(), 2);
        let active = button_tag(&html, 2);
        assert!(active.contains("bg-primary"));
        assert!(!active.contains("bg-muted"));
        assert!(button_tag(&html, 1).contains("bg-muted"));
    }
}
