#[cfg(target_arch = "wasm32")]
use crate::dom;
use gloo::events::EventListener;
#[cfg(target_arch = "wasm32")]
use megavault_core::page_size_for_width;
use megavault_core::viewport::WIDE;
use yew::prelude::*;

/// Blog cards per page for the current viewport width.
///
/// Samples the width on mount and on every `resize`; the listener is
/// dropped when the calling component unmounts.
#[hook]
pub fn use_viewport_page_size() -> usize {
    let page_size = use_state_eq(|| WIDE.page_size);
    {
        let page_size = page_size.clone();
        use_effect_with((), move |()| {
            let listener = watch_viewport(page_size);
            move || drop(listener)
        });
    }
    *page_size
}

#[cfg(target_arch = "wasm32")]
fn sample(page_size: &UseStateHandle<usize>) {
    if let Some(width) = dom::inner_width() {
        page_size.set(page_size_for_width(width));
    }
}

#[cfg(target_arch = "wasm32")]
fn watch_viewport(page_size: UseStateHandle<usize>) -> Option<EventListener> {
    sample(&page_size);
    log::debug!("resize listener attached");
    Some(EventListener::new(&dom::window(), "resize", move |_| {
        sample(&page_size);
    }))
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_viewport(_page_size: UseStateHandle<usize>) -> Option<EventListener> {
    None
}
